#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rastermix_image as image;

#[doc(inline)]
pub use rastermix_imgproc as imgproc;

#[doc(inline)]
pub use rastermix_io as io;

#[doc(inline)]
pub use rastermix_session as session;
