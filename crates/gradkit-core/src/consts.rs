/// 3x3 stencil, row-major, rows top to bottom.
pub type Kernel3 = [[i16; 3]; 3];

/// Largest value an 8-bit output sample can hold.
pub const MAX_SAMPLE: i16 = 255;

/// Smallest image side that still has an interior pixel for a 3x3 stencil.
pub const MIN_STENCIL_SIDE: usize = 3;

/// 4-neighbor Laplacian:
///   0  1  0
///   1 -4  1
///   0  1  0
pub const LAPLACE_4: Kernel3 = [[0, 1, 0], [1, -4, 1], [0, 1, 0]];

/// 8-neighbor Laplacian:
///   1  1  1
///   1 -8  1
///   1  1  1
pub const LAPLACE_8: Kernel3 = [[1, 1, 1], [1, -8, 1], [1, 1, 1]];

/// Sobel horizontal-edge kernel (top row minus bottom row).
pub const SOBEL_X: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Sobel vertical-edge kernel (left column minus right column).
pub const SOBEL_Y: Kernel3 = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];

/// Prewitt horizontal-edge kernel.
pub const PREWITT_X: Kernel3 = [[1, 1, 1], [0, 0, 0], [-1, -1, -1]];

/// Prewitt vertical-edge kernel.
pub const PREWITT_Y: Kernel3 = [[1, 0, -1], [1, 0, -1], [1, 0, -1]];

/// Workgroup edge length of the accelerated Sobel shader.
pub const GPU_WORKGROUP_SIDE: u32 = 16;
