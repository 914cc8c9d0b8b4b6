#[actix_web::main]
async fn main() -> std::io::Result<()> {
    flash_epaper_server::run().await
}
