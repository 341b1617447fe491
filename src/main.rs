#[tokio::main]
async fn main() -> std::io::Result<()> {
    vaga_livre::run().await
}
