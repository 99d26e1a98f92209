use stockroom_frontend::session;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("stockroom frontend starting");

    session::guard::install();
}
