pub mod form;
pub mod result;

pub use form::{PredictionForm, PredictionInput};
pub use result::PredictionResult;
