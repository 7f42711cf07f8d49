#[cfg(test)]
mod test {
    use crate::test::ResourceWorkspace;
    use crate::{
        BuildContext, CollectingContext, ConfigError, EmittedAsset, I18nConfig,
        I18nResourcePlugin, OutputConfig, PluginError, PluginOptions, ResourceDiagnostic,
        VIRTUAL_ID_PREFIX,
    };

    fn virtual_plugin(ws: &ResourceWorkspace) -> I18nResourcePlugin {
        I18nResourcePlugin::new(
            PluginOptions::new(
                ws.path().to_path_buf(),
                OutputConfig::virtual_module("virtual:i18n"),
            )
            .root("locales", &["app"]),
        )
        .unwrap()
    }

    fn file_plugin(ws: &ResourceWorkspace) -> I18nResourcePlugin {
        let mut output = OutputConfig::file("i18n.mjs");
        output.cjs_file_name = Some("i18n.cjs".to_string());
        output.dts_filename = Some("i18n.d.ts".to_string());
        I18nResourcePlugin::new(
            PluginOptions::new(ws.path().to_path_buf(), output).root("locales", &[]),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_virtual_module() {
        let ws = ResourceWorkspace::new();
        ws.mkdir("locales");
        let plugin = virtual_plugin(&ws);

        let id = plugin.resolve_id("virtual:i18n").unwrap();
        assert_eq!(id, format!("{}virtual:i18n", VIRTUAL_ID_PREFIX));
        assert!(id.starts_with('\0'));
        assert_eq!(plugin.resolve_id("./other.js"), None);
    }

    #[test]
    fn test_load_only_handles_own_id() {
        let ws = ResourceWorkspace::new();
        ws.mkdir("locales");
        let plugin = virtual_plugin(&ws);
        let mut ctx = CollectingContext::default();

        assert_eq!(plugin.load("virtual:i18n", &mut ctx).unwrap(), None);
        assert_eq!(plugin.load("/src/main.js", &mut ctx).unwrap(), None);

        let id = plugin.resolve_id("virtual:i18n").unwrap();
        let source = plugin.load(&id, &mut ctx).unwrap().unwrap();
        assert!(source.starts_with("export function i18nResources_"));
        assert!(source.contains(r#"modDef.define("app");"#));
        assert!(source.trim_end().ends_with(';'));
        assert!(source.contains("export default i18nResources_"));
    }

    #[test]
    fn test_virtual_load_recompiles() {
        let ws = ResourceWorkspace::new();
        ws.write("locales/en/app.json", r#"{"title": "Old"}"#);
        let plugin = virtual_plugin(&ws);
        let mut ctx = CollectingContext::default();
        let id = plugin.resolve_id("virtual:i18n").unwrap();

        let first = plugin.load(&id, &mut ctx).unwrap().unwrap();
        ws.write("locales/en/app.json", r#"{"title": "New"}"#);
        let second = plugin.load(&id, &mut ctx).unwrap().unwrap();

        assert!(first.contains(r#"{"title":"Old"}"#));
        assert!(second.contains(r#"{"title":"New"}"#));
        assert!(ctx.assets.is_empty());
    }

    #[test]
    fn test_virtual_mode_emits_nothing() {
        let ws = ResourceWorkspace::new();
        ws.mkdir("locales");
        let mut plugin = virtual_plugin(&ws);
        let mut ctx = CollectingContext::default();
        plugin.generate_bundle(&mut ctx).unwrap();
        assert!(ctx.assets.is_empty());
    }

    #[test]
    fn test_file_mode_emits_once() {
        let ws = ResourceWorkspace::new();
        ws.write("locales/en/app.json", r#"{"title": "Hello"}"#);
        let mut plugin = file_plugin(&ws);
        let mut ctx = CollectingContext::default();

        plugin.generate_bundle(&mut ctx).unwrap();
        plugin.generate_bundle(&mut ctx).unwrap();
        assert!(plugin.dispatcher().has_emitted());

        let names: Vec<&str> = ctx.assets.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, vec!["i18n.mjs", "i18n.cjs", "i18n.d.ts"]);

        let esm = &ctx.assets[0].source;
        let cjs = &ctx.assets[1].source;
        let dts = &ctx.assets[2].source;
        let name = esm
            .strip_prefix("export function ")
            .and_then(|rest| rest.split('(').next())
            .unwrap();
        assert!(esm.contains(r#"modDef.defines("app", "en", {"title":"Hello"});"#));
        assert!(cjs.contains(&format!("module.exports = {};", name)));
        assert!(cjs.contains(&format!("module.exports.default = {};", name)));
        assert!(dts.contains(&format!("declare function {}(modDef: ModuleDefinable): void;", name)));
        assert!(dts.contains(r#"from "i18n-runtime";"#));
    }

    #[test]
    fn test_file_mode_optional_assets() {
        let ws = ResourceWorkspace::new();
        ws.mkdir("locales");
        let mut plugin = I18nResourcePlugin::new(
            PluginOptions::new(ws.path().to_path_buf(), OutputConfig::file("out.js"))
                .root("locales", &[]),
        )
        .unwrap();
        let mut ctx = CollectingContext::default();
        plugin.generate_bundle(&mut ctx).unwrap();
        assert_eq!(ctx.assets.len(), 1);
        assert_eq!(ctx.assets[0].file_name, "out.js");
    }

    #[test]
    fn test_per_file_errors_become_warnings() {
        let ws = ResourceWorkspace::new();
        ws.write("locales/en/good.json", "{}");
        let bad = ws.write("locales/en/bad.json", "[1,");
        let mut plugin = file_plugin(&ws);
        let mut ctx = CollectingContext::default();

        plugin.generate_bundle(&mut ctx).unwrap();
        assert_eq!(ctx.warnings.len(), 1);
        assert_eq!(ctx.warnings[0].path, bad);
        assert_eq!(ctx.assets.len(), 3);
    }

    #[test]
    fn test_root_error_fails_build_and_emits_nothing() {
        let ws = ResourceWorkspace::new();
        let mut plugin = file_plugin(&ws);
        let mut ctx = CollectingContext::default();
        let result = plugin.generate_bundle(&mut ctx);
        assert!(matches!(result, Err(PluginError::Compile(_))));
        assert!(ctx.assets.is_empty());
        assert!(!plugin.dispatcher().has_emitted());
    }

    #[test]
    fn test_unknown_output_type_is_fatal() {
        let ws = ResourceWorkspace::new();
        let mut output = OutputConfig::file("x.js");
        output.kind = "inline".to_string();
        let result = I18nResourcePlugin::new(PluginOptions::new(ws.path().to_path_buf(), output));
        assert!(matches!(result, Err(ConfigError::UnknownOutputType(kind)) if kind == "inline"));
    }

    #[test]
    fn test_missing_output_field_is_fatal() {
        let ws = ResourceWorkspace::new();
        let mut output = OutputConfig::virtual_module("m");
        output.module_name = None;
        let result = I18nResourcePlugin::new(PluginOptions::new(ws.path().to_path_buf(), output));
        assert!(matches!(
            result,
            Err(ConfigError::MissingOutputField("virtual", "moduleName"))
        ));
    }

    #[test]
    fn test_from_config() {
        let ws = ResourceWorkspace::new();
        ws.write("i18n/locales/messages.de.json", r#"{"hallo": "welt"}"#);
        let config: I18nConfig = serde_json::from_str(
            r#"{
                "workingDir": "i18n",
                "roots": { "locales": ["shared"] },
                "determineLocale": "fileSuffix",
                "output": { "type": "virtual", "moduleName": "virtual:t" }
            }"#,
        )
        .unwrap();
        let plugin = I18nResourcePlugin::from_config(&config, ws.path()).unwrap();
        let id = plugin.resolve_id("virtual:t").unwrap();
        let mut ctx = CollectingContext::default();
        let source = plugin.load(&id, &mut ctx).unwrap().unwrap();
        assert!(source.contains(r#"modDef.defines("messages.de", "de", {"hallo":"welt"});"#));
    }

    #[test]
    fn test_custom_context() {
        struct Counting(usize, usize);
        impl BuildContext for Counting {
            fn emit_file(&mut self, _asset: EmittedAsset) {
                self.0 += 1;
            }

            fn warn(&mut self, _diagnostic: ResourceDiagnostic) {
                self.1 += 1;
            }
        }

        let ws = ResourceWorkspace::new();
        ws.write("locales/en/a.json", "nope");
        let mut plugin = file_plugin(&ws);
        let mut ctx = Counting(0, 0);
        plugin.generate_bundle(&mut ctx).unwrap();
        assert_eq!((ctx.0, ctx.1), (3, 1));
        assert!(plugin.compiler().working_dir().is_absolute());
    }
}
