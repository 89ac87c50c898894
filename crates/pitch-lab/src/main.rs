fn main() {
    env_logger::init();
    pitch_render::run();
}
