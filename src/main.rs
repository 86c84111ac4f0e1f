fn main() {
    pawpal_web::run();
}
