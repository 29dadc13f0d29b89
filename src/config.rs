//! Runtime configuration surface, constructed once by the embedder and
//! threaded into [`crate::Machine::new`] by value.

/// Choices this core leaves to the embedder: hardware variant and the
/// handful of behaviours the design notes flag as open questions.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct Config {
    /// Run as Game Boy Color rather than original monochrome hardware.
    #[arg(long)]
    pub is_cgb: bool,

    /// EI takes effect after the next instruction completes, matching
    /// real hardware, rather than immediately.
    #[arg(long, default_value_t = true)]
    pub ei_delay: bool,

    /// Emit a `trace!` line (PC, mnemonic, registers, flags) per instruction.
    #[arg(long)]
    pub trace: bool,

    /// Scan the MMU breakpoint lists on every memory access.
    #[arg(long)]
    pub breakpoints_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_cgb: true,
            ei_delay: true,
            trace: false,
            breakpoints_enabled: false,
        }
    }
}
