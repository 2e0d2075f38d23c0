//! Structure indicators: ZigZag, Pivots

pub mod evaluator;
pub mod fractal;
pub mod painter;
pub mod pivots;
pub mod scanner;
pub mod zigzag;

pub use evaluator::*;
pub use fractal::*;
pub use painter::*;
pub use pivots::*;
pub use scanner::*;
pub use zigzag::*;
