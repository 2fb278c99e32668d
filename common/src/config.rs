#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Hides the banner printed before any command output.
    pub no_banner: bool,
    /// Quiet level. `1` drops headers and decorations, `2` drops host trees too.
    pub quiet: u8,
    /// Restricts report item scans to the host's own subtree.
    ///
    /// Off by default: the classic behaviour scans every item in the document.
    pub host_scoped: bool,
    /// Reads `num_med` for medium findings and uses the collected count for
    /// informational ones instead of the classic summary field mapping.
    pub corrected_counts: bool,
    /// Reports the true elapsed run time instead of per-component differences.
    pub elapsed_run_time: bool,
}

