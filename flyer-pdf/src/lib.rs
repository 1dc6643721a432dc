pub mod document;
pub mod fonts;
pub mod graphics;
pub mod images;
pub mod objects;
pub mod writer;

pub use document::{PdfDocument, TextStyle};
pub use fonts::{BuiltinFont, FontMetrics};
pub use graphics::{Color, Rect};
pub use images::{load_image, ImageData, ImageFit, ImageId};
