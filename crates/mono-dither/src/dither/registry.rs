//! Name-to-kernel lookup.

use std::collections::BTreeMap;

use super::kernel::{Kernel, BUILTIN_KERNELS};
use crate::api::ConvertError;

/// Kernels selectable by name.
///
/// Lookups ignore ASCII case and the separators `-`, `_` and space, so
/// `"Floyd-Steinberg"`, `"floyd_steinberg"` and `"floydsteinberg"` all
/// select the same kernel.
///
/// # Example
///
/// ```
/// use mono_dither::{KernelRegistry, BURKES};
///
/// let registry = KernelRegistry::builtin();
/// assert_eq!(registry.lookup("burkes").unwrap(), &BURKES);
/// assert!(registry.lookup("atkinson").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KernelRegistry {
    kernels: BTreeMap<String, Kernel>,
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl KernelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in kernel.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kernel in BUILTIN_KERNELS {
            registry.kernels.insert(normalize(kernel.name), kernel);
        }
        registry
    }

    /// Add a kernel, replacing any kernel registered under the same name.
    ///
    /// Returns the replaced kernel, if any.
    pub fn register(&mut self, kernel: Kernel) -> Result<Option<Kernel>, ConvertError> {
        kernel.validate()?;
        Ok(self.kernels.insert(normalize(kernel.name), kernel))
    }

    /// The kernel registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Kernel> {
        self.kernels.get(&normalize(name))
    }

    /// Like [`get`](Self::get), but reports unknown names as an error.
    pub fn lookup(&self, name: &str) -> Result<&Kernel, ConvertError> {
        self.get(name)
            .ok_or_else(|| ConvertError::UnknownKernel(name.to_string()))
    }

    /// Display names of all registered kernels.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kernels.values().map(|k| k.name)
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dither::kernel::{FLOYD_STEINBERG, NULL, SIERRA_LITE, STUCKI};

    #[test]
    fn test_builtin_contains_required_kernels() {
        let registry = KernelRegistry::builtin();
        for name in ["Null", "Burkes", "Floyd-Steinberg", "Sierra-Lite", "Stucki"] {
            assert!(registry.get(name).is_some(), "{name} missing");
        }
        assert_eq!(registry.len(), BUILTIN_KERNELS.len());
    }

    #[test]
    fn test_lookup_is_forgiving() {
        let registry = KernelRegistry::builtin();
        assert_eq!(registry.get("floyd_steinberg"), Some(&FLOYD_STEINBERG));
        assert_eq!(registry.get("FloydSteinberg"), Some(&FLOYD_STEINBERG));
        assert_eq!(registry.get("sierra lite"), Some(&SIERRA_LITE));
        assert_eq!(registry.get("STUCKI"), Some(&STUCKI));
        assert_eq!(registry.get("null"), Some(&NULL));
    }

    #[test]
    fn test_floyd_steinberg_name_selects_sixteenths_table() {
        let registry = KernelRegistry::builtin();
        let fs = registry.lookup("floydsteinberg").unwrap();
        assert_eq!((fs.divisor, fs.max_dy), (16, 1));

        let jjn = registry.lookup("jarvis-judice-ninke").unwrap();
        assert_eq!((jjn.divisor, jjn.max_dy), (48, 2));
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = KernelRegistry::builtin();
        assert_eq!(
            registry.lookup("atkinson"),
            Err(ConvertError::UnknownKernel("atkinson".to_string()))
        );
    }

    #[test]
    fn test_register_custom_kernel() {
        const RIGHT_ONLY: Kernel = Kernel {
            name: "Right-Only",
            entries: &[(1, 0, 1)],
            divisor: 1,
            max_dy: 0,
        };
        let mut registry = KernelRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register(RIGHT_ONLY), Ok(None));
        assert_eq!(registry.get("right-only"), Some(&RIGHT_ONLY));
        assert_eq!(registry.register(RIGHT_ONLY), Ok(Some(RIGHT_ONLY)));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Right-Only"]);
    }

    #[test]
    fn test_register_rejects_invalid_kernel() {
        let mut registry = KernelRegistry::new();
        let bad = Kernel {
            name: "Bad",
            entries: &[(0, 0, 1)],
            divisor: 1,
            max_dy: 0,
        };
        assert!(registry.register(bad).is_err());
        assert!(registry.is_empty());
    }
}
