pub use polyfill_math as math;
