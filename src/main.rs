use plugin_conform::app;

fn main() {
    std::process::exit(app::startup::run());
}
