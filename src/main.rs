fn main() {
    if let Err(err) = tagcloud_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
