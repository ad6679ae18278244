use tracing::{error, info, warn};
use video_coordinator_rpc::shared::LoggingUtils;
use video_coordinator_rpc::{AppConfig, MessageType, RequestValidator};

fn main() {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    if let Err(e) = LoggingUtils::initialize(&config.logging.level, &config.logging.format) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Configuration loaded successfully");

    if let Err(e) = video_coordinator_rpc::initialize(&config) {
        error!("Failed to initialize rule registry: {}", e);
        std::process::exit(1);
    }

    let validator = match RequestValidator::from_global() {
        Ok(validator) => validator,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let registry = validator.registry();

    for message_type in MessageType::ALL {
        match registry.rules_for(message_type) {
            Some(rules) => info!(
                message_type = %message_type,
                rules = ?rules.expressions(),
                "Validation rules active"
            ),
            None => warn!(message_type = %message_type, "No validation rules registered"),
        }
    }

    info!(
        policy = ?registry.policy(),
        "Rule registry initialized with {} message types",
        registry.message_types().len()
    );
}
