mod boot;
mod controllers;
mod dom_surface;
mod exports;
mod perf;
mod site_config;

fn main() {
    boot::start();
}
