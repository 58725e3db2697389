//! Remove a selection from every compatible layer of a glyph.

use layersync::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
