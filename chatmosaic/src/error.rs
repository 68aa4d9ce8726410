use cgmath::Vector2;
use quick_error::quick_error;

quick_error! {
    /// The error type for mosaic layout and rendering.
    #[derive(Debug)]
    pub enum Error {
        /// The avatar count is outside `[1, 5]` or is not a number.
        InvalidCount(count: f32) {
            display("avatar count {} is outside the range [1, 5]", count)
        }
        /// Fewer images were supplied than the avatar count requires.
        MissingImage(needed: usize, supplied: usize) {
            display("{} avatar images are required, but only {} were supplied", needed, supplied)
        }
        /// The canvas size has a non-finite or negative component.
        InvalidCanvasSize(size: Vector2<f32>) {
            display("invalid canvas size: {:?}", size)
        }
        /// The drawing surface failed to perform an operation.
        Surface(err: Box<dyn std::error::Error + Send + Sync>) {
            display("drawing failed: {}", err)
        }
    }
}
