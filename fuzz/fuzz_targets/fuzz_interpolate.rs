#![no_main]

use arbitrary::Arbitrary;
use lexis_i18n::interpolate::{PlaceholderSyntax, interpolate};
use lexis_i18n::{Params, params};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    template: &'a str,
    name: &'a str,
    value: &'a str,
    single: bool,
}

fuzz_target!(|input: Input<'_>| {
    if input.template.len() > 2048 {
        return;
    }
    let syntax = if input.single {
        PlaceholderSyntax::SingleBrace
    } else {
        PlaceholderSyntax::DoubleBrace
    };

    // No parameters: the template is returned as-is.
    assert_eq!(interpolate(input.template, &Params::new(), syntax), input.template);

    let p = params! {
        input.name => input.value,
        "nested" => params! { "inner" => 1 },
    };
    let _ = interpolate(input.template, &p, syntax);
});
