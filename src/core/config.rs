use super::error::CleanError;

/// Number of passes made when none is requested.
pub const DEFAULT_PASSES: u32 = 5;

/// Options for a single invocation.
///
/// Built once from the command line and handed to the pruner by reference;
/// nothing here changes while a run is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub passes: u32,
    pub verbose: bool,
    pub confirm: bool,
    pub suppress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            verbose: false,
            confirm: false,
            suppress: false,
        }
    }
}

impl RunConfig {
    /// Create a config with the given pass limit and all switches off.
    pub fn new(passes: u32) -> Result<Self, CleanError> {
        if passes == 0 {
            return Err(CleanError::InvalidPassCount);
        }
        Ok(Self {
            passes,
            ..Self::default()
        })
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn suppress(mut self, suppress: bool) -> Self {
        self.suppress = suppress;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_makes_five_passes() {
        let config = RunConfig::default();
        assert_eq!(config.passes, DEFAULT_PASSES);
        assert!(!config.verbose && !config.confirm && !config.suppress);
    }

    #[test]
    fn zero_passes_is_rejected() {
        assert!(matches!(
            RunConfig::new(0),
            Err(CleanError::InvalidPassCount)
        ));
    }

    #[test]
    fn builder_sets_switches() {
        let config = RunConfig::new(2).unwrap().verbose(true).confirm(true);
        assert_eq!(config.passes, 2);
        assert!(config.verbose);
        assert!(config.confirm);
        assert!(!config.suppress);
    }
}
