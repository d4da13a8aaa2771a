use tap_splash::components::App;
use tap_splash::util::init_logging;

fn main() {
    init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
