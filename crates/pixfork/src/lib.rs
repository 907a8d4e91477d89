#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use pixfork_image as image;

#[doc(inline)]
pub use pixfork_imgproc as imgproc;

#[doc(inline)]
pub use pixfork_io as io;
