//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error. Kernels reach at most two columns to either
//! side and two rows below the current pixel.

use crate::api::ConvertError;

/// Furthest horizontal reach of a kernel entry.
pub const MAX_DX: i32 = 2;

/// Furthest vertical reach of a kernel entry.
pub const MAX_DY: usize = 2;

/// A named error diffusion kernel.
///
/// Each neighbor at `(dx, dy)` receives `error * weight / divisor`. Built-in
/// kernels propagate 100% of the error (weights sum to the divisor) except
/// [`NULL`], which propagates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Display name, also the registry key.
    pub name: &'static str,

    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right, flipped for serpentine)
    /// - `dy`: vertical offset (0 = current row, only `dx > 0` allowed there)
    /// - `weight`: numerator over `divisor`
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    ///
    /// Used to determine error buffer depth: need `max_dy + 1` rows.
    pub max_dy: usize,
}

impl Kernel {
    /// Check that the kernel only reaches unvisited neighbors within range
    /// and that its weights sum to the divisor.
    pub fn validate(&self) -> Result<(), ConvertError> {
        let invalid = |reason: &str| ConvertError::InvalidKernel {
            name: self.name.to_string(),
            reason: reason.to_string(),
        };

        if self.divisor == 0 {
            return Err(invalid("divisor is zero"));
        }
        for &(dx, dy, _) in self.entries {
            if dy < 0 || dy as usize > MAX_DY || dx.abs() > MAX_DX {
                return Err(invalid("entry out of reach"));
            }
            if dy == 0 && dx <= 0 {
                return Err(invalid("entry points at a visited pixel"));
            }
        }

        let reach = self
            .entries
            .iter()
            .map(|&(_, dy, _)| dy as usize)
            .max()
            .unwrap_or(0);
        if reach != self.max_dy {
            return Err(invalid("max_dy does not match entries"));
        }

        let sum: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        if !self.entries.is_empty() && sum != u32::from(self.divisor) {
            return Err(invalid("weights do not sum to the divisor"));
        }
        Ok(())
    }
}

/// No diffusion at all: plain 50% thresholding.
pub const NULL: Kernel = Kernel {
    name: "Null",
    entries: &[],
    divisor: 1,
    max_dy: 0,
};

/// Floyd-Steinberg dithering kernel.
///
/// These are the classic 7/3/5/1 weights over 16. Tools that label the
/// three-row table over 48 as "Floyd-Steinberg" actually mean
/// [`JARVIS_JUDICE_NINKE`]; select that kernel to reproduce their output.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "Floyd-Steinberg",
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    name: "Jarvis-Judice-Ninke",
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// Sierra (full/Sierra-3) dithering kernel.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    name: "Sierra",
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
    max_dy: 2,
};

/// Sierra Two-Row dithering kernel.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const SIERRA_TWO_ROW: Kernel = Kernel {
    name: "Sierra-Two-Row",
    entries: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
    max_dy: 1,
};

/// Sierra Lite dithering kernel, the minimal 2x2 pattern.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    name: "Sierra-Lite",
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
    max_dy: 1,
};

/// Stucki dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "Stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Burkes dithering kernel, a two-row Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    name: "Burkes",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// Every kernel shipped with the crate, in registry order.
pub const BUILTIN_KERNELS: [Kernel; 8] = [
    NULL,
    BURKES,
    FLOYD_STEINBERG,
    JARVIS_JUDICE_NINKE,
    SIERRA,
    SIERRA_TWO_ROW,
    SIERRA_LITE,
    STUCKI,
];
