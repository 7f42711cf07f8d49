use crate::compiler::string_literal;
use crate::factory::CompilationResult;

/// ES module: the function as a named export and as the default export.
pub fn render_esm(result: &CompilationResult) -> String {
    format!(
        "export {}export default {};\n",
        result.code, result.name
    )
}

/// CommonJS module usable through `require(..)` and through default-import
/// interop. Both see the same function.
pub fn render_cjs(result: &CompilationResult) -> String {
    let name = &result.name;
    let mut out = String::from("\"use strict\";\n");
    out.push_str(&result.code);
    out.push_str(&format!(
        "Object.defineProperty({name}, \"__esModule\", {{ value: true }});\n"
    ));
    out.push_str("module.exports = ");
    out.push_str(name);
    out.push_str(";\n");
    out.push_str(&format!("module.exports.default = {name};\n"));
    out.push_str(&format!("module.exports.{name} = {name};\n"));
    out
}

/// Type declarations only. `definable_import` is the module that exports
/// the `ModuleDefinable` type.
pub fn render_dts(result: &CompilationResult, definable_import: &str) -> String {
    let name = &result.name;
    format!(
        "import type {{ ModuleDefinable }} from {};\n\n\
         declare function {name}(modDef: ModuleDefinable): void;\n\
         export {{ {name} }};\n\
         export default {name};\n",
        string_literal(definable_import)
    )
}
