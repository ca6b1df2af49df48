use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("gesture has {vertex_count} points, at least 3 are required to form a region")]
    DegenerateGesture { vertex_count: usize },
    #[error("selector is not initialized with a point set")]
    UninitializedSelector,
    #[error("selector was initialized with {expected} points, but {actual} were provided")]
    ResourceSizeMismatch { expected: usize, actual: usize },
    #[error("point set has {positions} positions but {colors} colors")]
    PointSetLengthMismatch { positions: usize, colors: usize },
    #[error("{count} points do not fit in a result texture of max side {max_side}")]
    TooManyPoints { count: usize, max_side: u32 },
    #[error("{0}")]
    BufferDownloadOneShotReceive(#[from] oneshot::RecvError),
    #[error("{0}")]
    BufferDownloadAsync(#[from] wgpu::BufferAsyncError),
    #[error("{0}")]
    DevicePoll(#[from] wgpu::PollError),
}
