// FICHIER : src/main.rs

use lumispec::config::ServerConfig;
use lumispec::{server, utils};

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Erreur fatale de configuration : {}", e);
            std::process::exit(1);
        }
    };

    println!("🚀 Démarrage de lumispec...");
    utils::init_logging(&config.data_root);

    if let Err(e) = server::run(config).await {
        eprintln!("❌ Erreur fatale du serveur : {}", e);
        std::process::exit(1);
    }
}
