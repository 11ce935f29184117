//! External command lines
//!
//! Builds the `CommandSpec`s for certbot, docker, git and maven from the
//! installer configuration. Nothing here runs a process.

use std::path::Path;

use crate::config::{BuildConfig, CertbotConfig, DeployConfig, ImageSpec};
use crate::domain::entities::keys;
use crate::domain::ports::CommandSpec;
use crate::domain::value_objects::{CertificateConfig, DeploymentProfile};

/// `[sudo] certbot certonly --standalone ...` for `domain`, registered to `email`.
pub fn certbot_command(config: &CertbotConfig, domain: &str, email: &str) -> CommandSpec {
    let args = [
        "certonly".to_string(),
        "--standalone".to_string(),
        "--email".to_string(),
        email.to_string(),
        "-d".to_string(),
        domain.to_string(),
        "--rsa-key-size".to_string(),
        config.rsa_key_size.to_string(),
        "--agree-tos".to_string(),
        "--cert-name".to_string(),
        config.cert_name.clone(),
        "--keep-until-expiring".to_string(),
        "--non-interactive".to_string(),
    ];

    if config.use_sudo {
        CommandSpec::new("sudo").arg("certbot").args(args)
    } else {
        CommandSpec::new("certbot").args(args)
    }
}

pub fn image_build_command(image: &ImageSpec) -> CommandSpec {
    CommandSpec::new("docker").args(["build", "--pull", "-t", image.tag.as_str(), image.context.as_str()])
}

pub fn server_clone_command(config: &BuildConfig) -> CommandSpec {
    CommandSpec::new("git").args([
        "clone",
        "-b",
        config.server_branch.as_str(),
        "--single-branch",
        "--depth=1",
        config.server_repo.as_str(),
        path_arg(&config.server_dir).as_str(),
    ])
}

pub fn server_build_command(config: &BuildConfig) -> CommandSpec {
    CommandSpec::new("mvn")
        .args(["-pl", config.maven_modules.join(",").as_str(), "clean", "install", "-DskipTests"])
        .current_dir(&config.server_dir)
}

/// `docker stack deploy` with the compose overlay for `profile`.
///
/// Manual certificates are handed to the compose file through the
/// environment of the deploy process.
pub fn deploy_command(
    config: &DeployConfig,
    profile: DeploymentProfile,
    certificate: Option<&CertificateConfig>,
) -> CommandSpec {
    let mut spec = CommandSpec::new("docker")
        .args(["stack", "deploy", "-c"])
        .arg(path_arg(&config.base_compose));

    match profile {
        DeploymentProfile::Plain => {}
        DeploymentProfile::HttpsAutomated => {
            spec = spec.arg("-c").arg(path_arg(&config.https_certbot_compose));
        }
        DeploymentProfile::HttpsManual => {
            spec = spec.arg("-c").arg(path_arg(&config.https_manual_compose));
            if let Some(CertificateConfig::Manual { fullchain, privkey }) = certificate {
                spec = spec
                    .env(keys::CERT_FULLCHAIN_PATH, path_arg(fullchain))
                    .env(keys::CERT_PRIVKEY_PATH, path_arg(privkey));
            }
        }
    }

    spec.arg(&config.stack_name)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
