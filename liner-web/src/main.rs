fn main() {
    dioxus::launch(liner_web::App);
}
