fn main() {
    dioxus::launch(lens_web::App);
}
