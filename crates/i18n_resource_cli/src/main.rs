mod cmd_args;
mod fs_context;
mod init;

use std::process::ExitCode;

use clap::Parser;
use cmd_args::CmdArgs;
use fs_context::FsBuildContext;
use i18n_resource::{I18nConfig, I18nResourcePlugin, OutputTarget};

fn main() -> ExitCode {
    let args = CmdArgs::parse();
    init::setup_logger(args.verbose);

    if args.print_schema {
        let schema = schemars::schema_for!(I18nConfig);
        match serde_json::to_string_pretty(&schema) {
            Ok(text) => {
                println!("{}", text);
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                log::error!("Failed to serialize schema: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    let workspace = std::path::absolute(&args.workspace).unwrap_or(args.workspace.clone());
    let loaded = init::parse_overrides(&args.overrides)
        .and_then(|overrides| init::load_workspace_config(&workspace, args.config, overrides));
    let (config, config_root) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut plugin = match I18nResourcePlugin::from_config(&config, &config_root) {
        Ok(plugin) => plugin,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let out_dir = args.out.unwrap_or_else(|| workspace.clone());
    let mut ctx = FsBuildContext::new(&out_dir);

    let result = match plugin.dispatcher().target().clone() {
        OutputTarget::Virtual { module_name } => {
            let id = plugin.resolve_id(&module_name);
            match id.map(|id| plugin.load(&id, &mut ctx)) {
                Some(Ok(Some(source))) => {
                    print!("{}", source);
                    Ok(())
                }
                Some(Ok(None)) | None => Ok(()),
                Some(Err(err)) => Err(err),
            }
        }
        OutputTarget::File { .. } => plugin.generate_bundle(&mut ctx),
    };

    if !ctx.warnings.is_empty() {
        log::warn!("{} resource file(s) skipped", ctx.warnings.len());
    }

    if let Err(err) = result {
        log::error!("{}", err);
        return ExitCode::FAILURE;
    }
    if !ctx.write_errors.is_empty() {
        return ExitCode::FAILURE;
    }

    for path in &ctx.written {
        eprintln!("Written to {}", path.display());
    }
    ExitCode::SUCCESS
}
