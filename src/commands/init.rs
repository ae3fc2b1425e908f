use crate::libs::config::Credentials;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_init_args: InitArgs) -> Result<()> {
    msg_print!(Message::ConfigSetupHeader);
    let credentials = Credentials {
        account: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAccount.to_string())
            .interact_text()?,
        username: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
        password: Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };

    let path = credentials.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
