#![no_main]

use lexis_i18n::{Params, TranslationManager, TranslationTree, validate_tree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if json.len() > 8192 {
        return;
    }
    let Ok(tree) = TranslationTree::from_json_str(json) else {
        return;
    };
    let _ = validate_tree(&tree);

    let i18n = TranslationManager::new(tree.clone());
    for (locale, node) in tree.iter() {
        for key in node.leaf_keys() {
            let _ = i18n.t(locale, &key);
            let _ = i18n.translate_plural(locale, &key, 2.0, &Params::new());
            let _ = i18n.translate_message(locale, &key, &Params::new());
        }
    }
    let _ = i18n.coverage();
});
