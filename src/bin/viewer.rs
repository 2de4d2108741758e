use std::io;
use std::process;

use env_logger::Env;

use monobrot::app::App;
use monobrot::config::Config;
use monobrot::gui::DruidSurface;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let mut surface = DruidSurface::new();
    if let Err(e) = App::new(Config::default()).run(&mut surface) {
        process::exit(e.report(&mut io::stderr()));
    }
}
