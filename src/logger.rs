const LOGGER_CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    // Running without a config file is allowed, log records are simply dropped then.
    if std::path::Path::new(LOGGER_CONFIG_FILE).is_file() {
        if let Err(e) = log4rs::init_file(LOGGER_CONFIG_FILE, Default::default()) {
            eprintln!("Logger initialization failed: {}", e);
        }
    }
}
