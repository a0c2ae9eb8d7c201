use argh::FromArgs;
use rastermix::imgproc::segment::DEFAULT_TOLERANCE;
use rastermix::session::ImageSession;

/// Applies a transform or animation to an image and writes the result
#[derive(Debug, FromArgs)]
struct Args {
    /// input image path
    #[argh(positional)]
    input: String,

    /// output image path
    #[argh(positional)]
    output: String,

    /// operation: mirror-h, mirror-v, rotate-cw, rotate-ccw, segment, fade, blend
    #[argh(option, short = 'o', default = "String::from(\"mirror-h\")")]
    op: String,

    /// second image path for the blend operation
    #[argh(option, short = 's')]
    second: Option<String>,

    /// target color as R,G,B for the segment operation
    #[argh(option, short = 'c', default = "String::from(\"255,0,0\")")]
    color: String,

    /// per-channel tolerance for the segment operation
    #[argh(option, short = 't', default = "DEFAULT_TOLERANCE")]
    tolerance: i32,

    /// animation frame index to export for fade and blend
    #[argh(option, short = 'f', default = "0")]
    frame: usize,
}

fn parse_color(text: &str) -> Result<[i32; 3], String> {
    let channels = text
        .split(',')
        .map(|token| token.trim().parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| format!("invalid color {:?}, expected R,G,B", text))?;
    match channels.as_slice() {
        &[r, g, b] => Ok([r, g, b]),
        _ => Err(format!("invalid color {:?}, expected R,G,B", text)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut session = ImageSession::new();
    session.load(&args.input)?;

    match args.op.as_str() {
        "mirror-h" => session.apply_mirror_horizontal()?,
        "mirror-v" => session.apply_mirror_vertical()?,
        "rotate-cw" => session.apply_rotate_cw()?,
        "rotate-ccw" => session.apply_rotate_ccw()?,
        "segment" => {
            let target = parse_color(&args.color)?;
            session.apply_segmentation(target, args.tolerance)?;
        }
        "fade" => {
            session.apply_fade_from_black()?;
            for _ in 0..args.frame {
                session.advance_frame();
            }
        }
        "blend" => {
            let second = args.second.ok_or("blend requires --second")?;
            session.load_second(&second)?;
            session.apply_cross_fade()?;
            for _ in 0..args.frame {
                session.advance_frame();
            }
        }
        other => return Err(format!("unknown operation: {}", other).into()),
    }

    session.save(&args.output)?;

    Ok(())
}
