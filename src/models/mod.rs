pub mod image;
pub mod question;
pub mod responses;

pub use image::UploadedImage;
pub use question::Question;
pub use responses::{CorrectionResponse, HintResponse, SolveResponse};
