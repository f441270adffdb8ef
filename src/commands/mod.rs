mod describe;
pub use describe::describe;
