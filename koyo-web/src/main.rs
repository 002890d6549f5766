//! Kōyō Gallery - photo gallery web app

fn main() {
    dioxus::launch(koyo_web::App);
}
