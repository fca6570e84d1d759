//! Static style synchronization with the rendering collaborator.

use crate::options::Options;
use crate::render::{ShellRenderer, ShellStyle};

/// Push the full static style set to every shell's material instance.
///
/// Called once when the rig activates, again after a reconfiguration, and
/// every tick while the live-restyle debug option is set.
pub(crate) fn push_full_style<R: ShellRenderer>(
    options: &Options,
    renderer: &mut R,
) {
    let shell_count = options.animation.shell_count;
    for index in 0..shell_count {
        let style = ShellStyle::for_shell(index, shell_count, &options.style);
        renderer.apply_style(index, &style);
    }
}
