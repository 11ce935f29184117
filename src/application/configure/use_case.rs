//! Configure Use Case
//!
//! Orchestrates the interactive configuration flow:
//! 1. Load the https env file (fatal if missing)
//! 2. Offer to reuse a complete progress cache
//! 3. Otherwise prompt: domain, LDAP password, HTTPS enforcement, admin
//!    email, DNS readiness, certificate source
//! 4. Write the env file back
//!
//! Every answer is merged into the progress cache as soon as it is given.
//! Invalid input ends the run; nothing is retried in a loop.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::application::commands::certbot_command;
use crate::domain::entities::{keys, EnvironmentMap, ProgressKey};
use crate::domain::policies::{validate_domain, validate_email};
use crate::domain::ports::{CommandRunner, Console};
use crate::domain::value_objects::CertificateConfig;
use crate::error::{InstallerError, InstallerResult};
use crate::infrastructure::{replace_in_file, EnvFileStore, ProgressCache};

use super::options::ConfigureOptions;
use super::result::{ConfigureOutcome, ConfiguredInstall};

const LDAP_PASSWORD_PATTERN: &str = r"^\s*LDAP_ADMIN_PASSWORD=.*$";

/// HTTPS decision and certificate source, from prompts or the cache
struct Answers {
    enforce_https: bool,
    certificate: Option<CertificateConfig>,
}

pub struct ConfigureUseCase<'a, C, R>
where
    C: Console + ?Sized,
    R: CommandRunner + ?Sized,
{
    console: &'a C,
    runner: &'a R,
    options: ConfigureOptions,
}

impl<'a, C, R> ConfigureUseCase<'a, C, R>
where
    C: Console + ?Sized,
    R: CommandRunner + ?Sized,
{
    pub fn new(console: &'a C, runner: &'a R, options: ConfigureOptions) -> Self {
        Self {
            console,
            runner,
            options,
        }
    }

    pub fn execute(&self) -> InstallerResult<ConfigureOutcome> {
        let env_store = EnvFileStore::new(&self.options.env_file);
        let mut env = env_store.load()?;
        self.console.info(&format!(
            "Found configuration at {}",
            env_store.path().display()
        ));

        self.console
            .info("Welcome to the ODK-X sync endpoint installation!");
        self.console
            .info("This script will guide you through setting up your installation");
        self.console
            .info("We'll need some information from you to get started though...");
        self.console.info("");

        let cache = ProgressCache::new(&self.options.progress_file);

        let answers = if cache.is_complete()? {
            let reuse = self
                .console
                .confirm("Do you wish to use cached configuration?", true)?;
            self.console.info("");
            if reuse {
                self.replay_cache(&cache, &mut env)?
            } else {
                cache.clear()?;
                match self.prompt_fresh(&cache, &mut env)? {
                    Some(answers) => answers,
                    None => return Ok(ConfigureOutcome::Deferred),
                }
            }
        } else {
            match self.prompt_fresh(&cache, &mut env)? {
                Some(answers) => answers,
                None => return Ok(ConfigureOutcome::Deferred),
            }
        };

        env_store.save(&env)?;
        self.console.success(&format!(
            "Saved https configuration to {}",
            env_store.path().display()
        ));

        Ok(ConfigureOutcome::Ready(ConfiguredInstall {
            enforce_https: answers.enforce_https,
            certificate: answers.certificate,
            env,
        }))
    }

    /// Replay a complete cache into `env` without prompting.
    ///
    /// Cached certificate paths are used as-is; they are not checked again.
    fn replay_cache(
        &self,
        cache: &ProgressCache,
        env: &mut EnvironmentMap,
    ) -> InstallerResult<Answers> {
        let record = cache.load()?;
        if let Some(snapshot) = &record.env {
            env.apply(snapshot);
        }

        let enforce_https = record.enforce_https.unwrap_or(true);
        let manual = record.manual_certificate.unwrap_or(false);
        tracing::info!(enforce_https, manual, "reusing cached configuration");
        self.console
            .info(&format!("Enforcing https: {}", enforce_https));

        let certificate = if !enforce_https {
            None
        } else if manual {
            Some(CertificateConfig::Manual {
                fullchain: PathBuf::from(env.get_or_empty(keys::CERT_FULLCHAIN_PATH)),
                privkey: PathBuf::from(env.get_or_empty(keys::CERT_PRIVKEY_PATH)),
            })
        } else {
            self.acquire_certificate(env)?;
            Some(CertificateConfig::Automated)
        };

        Ok(Answers {
            enforce_https,
            certificate,
        })
    }

    /// Full question sequence. `None` means the user is not ready yet.
    fn prompt_fresh(
        &self,
        cache: &ProgressCache,
        env: &mut EnvironmentMap,
    ) -> InstallerResult<Option<Answers>> {
        let mut snapshot: IndexMap<String, String> = IndexMap::new();

        let domain = self.prompt_domain(env)?;
        snapshot.insert(keys::HTTPS_DOMAIN.to_string(), domain.clone());
        cache.save(ProgressKey::Env, serde_json::to_value(&snapshot)?)?;
        self.console.info("");

        self.prompt_ldap_password()?;

        self.console
            .info("Would you like to enforce HTTPS? We recommend yes.");
        let enforce_https = self.console.confirm("enforce https?", true)?;
        if !enforce_https {
            self.console.info(
                "Would you like to run an INSECURE and DANGEROUS server that will share \
                 your users's information if exposed to the Internet?",
            );
            if !self.console.confirm("run insecure?", false)? {
                return Err(InstallerError::InsecureDeclined);
            }
        }
        cache.save(ProgressKey::EnforceHttps, enforce_https)?;
        self.console
            .info(&format!("Enforcing https: {}", enforce_https));

        if !enforce_https {
            cache.save(ProgressKey::ManualCertificate, false)?;
            return Ok(Some(Answers {
                enforce_https,
                certificate: None,
            }));
        }

        let email = self.prompt_email(env)?;
        snapshot.insert(keys::HTTPS_ADMIN_EMAIL.to_string(), email);
        cache.save(ProgressKey::Env, serde_json::to_value(&snapshot)?)?;

        self.console
            .info("The system will now attempt to setup an HTTPS certificate for this server.");
        self.console.info(
            "For this to work you must have already have purchased/acquired a domain name \
             (or subdomain) and setup a DNS A or AAAA record to point at this server's IP address.",
        );
        self.console
            .info("If you have not done this yet, please do it now...");
        let ready = self.console.confirm(
            "Domain is ready to proceed with certificate acquisition?",
            true,
        )?;
        if !ready {
            self.console
                .info("Re-run this script once the domain is ready!");
            return Ok(None);
        }

        let manual = self.console.confirm(
            "Do you wish to supply your own SSL certificate? If not, the script will use \
             certbot (please make sure it is already installed).",
            false,
        )?;

        let certificate = if manual {
            let certificate = self.prompt_manual_certificate(env)?;
            if let CertificateConfig::Manual { fullchain, privkey } = &certificate {
                snapshot.insert(keys::CERT_FULLCHAIN_PATH.to_string(), display(fullchain));
                snapshot.insert(keys::CERT_PRIVKEY_PATH.to_string(), display(privkey));
                cache.save(ProgressKey::Env, serde_json::to_value(&snapshot)?)?;
            }
            certificate
        } else {
            self.acquire_certificate(env)?;
            CertificateConfig::Automated
        };
        cache.save(ProgressKey::ManualCertificate, certificate.is_manual())?;

        self.console
            .info("Attempting to save updated https configuration");
        Ok(Some(Answers {
            enforce_https,
            certificate: Some(certificate),
        }))
    }

    fn prompt_domain(&self, env: &mut EnvironmentMap) -> InstallerResult<String> {
        self.console.info(
            "Please input the domain name you will use for this installation. A valid domain \
             name is required for HTTPS without distributing custom certificates.",
        );
        let domain = self
            .console
            .input("domain", env.get_or_empty(keys::HTTPS_DOMAIN))?;
        if !validate_domain(&domain) {
            return Err(InstallerError::InvalidDomain { domain });
        }
        env.set(keys::HTTPS_DOMAIN, domain.as_str());
        Ok(domain)
    }

    fn prompt_email(&self, env: &mut EnvironmentMap) -> InstallerResult<String> {
        self.console.info(
            "Please provide an admin email for security updates with HTTPS registration",
        );
        let email = self
            .console
            .input("admin email", env.get_or_empty(keys::HTTPS_ADMIN_EMAIL))?;
        if !validate_email(&email) {
            return Err(InstallerError::InvalidEmail { email });
        }
        env.set(keys::HTTPS_ADMIN_EMAIL, email.as_str());
        Ok(email)
    }

    fn prompt_ldap_password(&self) -> InstallerResult<()> {
        let custom = self.console.confirm(
            "Do you want to use a custom LDAP administration password?",
            false,
        )?;
        if !custom {
            return Ok(());
        }

        self.console.info("");
        self.console
            .info("Please input the password to use for ldap admin");
        let password = self.console.password("Ldap admin password")?;
        if password.is_empty() {
            return Ok(());
        }

        let path = &self.options.ldap_env_file;
        let changed = replace_in_file(
            path,
            ldap_password_regex(),
            &format!("LDAP_ADMIN_PASSWORD={password}"),
        )?;
        if changed == 0 {
            self.console.warn(&format!(
                "No LDAP_ADMIN_PASSWORD line found in {}; password unchanged",
                path.display()
            ));
        } else {
            self.console.success("LDAP admin password updated");
        }
        Ok(())
    }

    fn prompt_manual_certificate(
        &self,
        env: &mut EnvironmentMap,
    ) -> InstallerResult<CertificateConfig> {
        self.console
            .info("Please enter path to fullchain .pem/.crt file");
        let fullchain = self
            .console
            .input("fullchain file", env.get_or_empty(keys::CERT_FULLCHAIN_PATH))?;
        self.console
            .info("Please enter path to private key .pem file");
        let privkey = self
            .console
            .input("private key file", env.get_or_empty(keys::CERT_PRIVKEY_PATH))?;

        if fullchain.is_empty() || privkey.is_empty() {
            return Err(InstallerError::CertificateInputMissing);
        }

        let fullchain = std::path::absolute(&fullchain)?;
        let privkey = std::path::absolute(&privkey)?;
        for path in [&fullchain, &privkey] {
            if !path.exists() {
                return Err(InstallerError::CertificateFileMissing { path: path.clone() });
            }
        }

        env.set(keys::CERT_FULLCHAIN_PATH, display(&fullchain));
        env.set(keys::CERT_PRIVKEY_PATH, display(&privkey));
        Ok(CertificateConfig::Manual { fullchain, privkey })
    }

    /// Run the acquisition tool. Failure is reported and the run continues;
    /// only an interrupt is returned.
    fn acquire_certificate(&self, env: &EnvironmentMap) -> InstallerResult<()> {
        let domain = env.get_or_empty(keys::HTTPS_DOMAIN);
        let email = env.get_or_empty(keys::HTTPS_ADMIN_EMAIL);
        if self.options.certbot.use_sudo {
            self.console.info("Please enter your system Password");
        }

        let command = certbot_command(&self.options.certbot, domain, email);
        match self.runner.run(&command) {
            Ok(outcome) if outcome.is_success() => {
                self.console
                    .success(&format!("Certificate ready for {}", domain));
            }
            Err(InstallerError::Interrupted) => return Err(InstallerError::Interrupted),
            Ok(outcome) => {
                tracing::warn!(?outcome, "certificate acquisition failed");
                self.console.error("Error setting up certbot certificate.");
            }
            Err(e) => {
                tracing::warn!(error = %e, "certificate acquisition could not start");
                self.console.error("Error setting up certbot certificate.");
            }
        }
        Ok(())
    }
}

fn ldap_password_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LDAP_PASSWORD_PATTERN).expect("LDAP password pattern is valid"))
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
