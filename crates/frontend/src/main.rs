use salesclose_frontend::App;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeWebConsoleWriter};

fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
}

fn main() {
    console_error_panic_hook::set_once();

    if init_tracing().is_err() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    yew::Renderer::<App>::new().render();
}
