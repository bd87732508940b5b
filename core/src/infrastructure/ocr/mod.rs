pub mod tesseract;

pub use tesseract::TesseractOcr;
