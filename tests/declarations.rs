//! Integration tests for declaration parsing: functions, classes, modules

use monkeyc::ast::Modifier;
use monkeyc::testing::{assert_ast, McSources};

#[test]
fn test_functions_sample_shape() {
    let program = McSources::get_program("010-functions.mc").unwrap();

    assert_ast(&program)
        .statement_count(5)
        .statement(1, |s| {
            s.assert_function()
                .name("greet")
                .parameter_count(1)
                .parameter(0, "name")
                .has_return_type();
        })
        .statement(2, |s| {
            s.assert_function()
                .name("clamp")
                .parameter_count(3)
                .parameter(0, "value")
                .parameter(1, "low")
                .parameter(2, "high")
                .has_return_type();
        })
        .statement(3, |s| {
            // The first parameter's type is a full Method(...) as Number
            s.assert_function().name("apply").parameter_count(2);
        })
        .statement(4, |s| {
            s.assert_function()
                .name("sum")
                .parameter_count(1)
                .body_statement_count(3);
        });
}

#[test]
fn test_classes_sample_shape() {
    let program = McSources::get_program("020-classes.mc").unwrap();

    assert_ast(&program)
        .statement_count(3)
        .statement(0, |s| {
            s.assert_using().path("Toybox.System").alias("Sys");
        })
        .statement(1, |s| {
            s.assert_class()
                .name("Account")
                .no_heritage()
                .member_count(6)
                .field(0, |f| {
                    f.name("balance")
                        .modifier(Modifier::Private)
                        .has_type()
                        .has_value();
                })
                .field(1, |f| {
                    f.name("INTEREST_RATE")
                        .is_const()
                        .modifier(Modifier::Static)
                        .has_value();
                })
                .field(2, |f| {
                    f.name("owner");
                })
                .method(3, |m| {
                    m.name("initialize").parameter_count(1);
                })
                .method(4, |m| {
                    m.name("deposit").parameter_count(1).has_return_type();
                })
                .method(5, |m| {
                    m.name("dump").parameter_count(0).annotated_with("debug");
                });
        })
        .statement(2, |s| {
            s.assert_class()
                .name("SavingsAccount")
                .has_heritage()
                .member_count(2);
        });
}

#[test]
fn test_modules_sample_shape() {
    let program = McSources::get_program("030-modules.mc").unwrap();

    assert_ast(&program)
        .statement_count(5)
        .statement(1, |s| {
            s.assert_module()
                .name("Geometry")
                .body_statement_count(3)
                .body_statement(0, |b| {
                    b.assert_variable().name("TWO_PI").is_const();
                })
                .body_statement(1, |b| {
                    b.assert_function().name("circleArea");
                })
                .body_statement(2, |b| {
                    b.assert_module().name("Vectors").body_statement_count(1);
                });
        })
        .statement(2, |s| {
            s.assert_type_alias();
        })
        .statement(3, |s| {
            // The ';' after a typedef is its own empty statement
            s.assert_empty();
        })
        .statement(4, |s| {
            s.assert_module().name("GeometryTest").annotated_with("test");
        });
}

#[test]
fn test_annotated_class_with_modifiers() {
    let program = monkeyc::testing::parse_source(
        "(:background) public class Listener { function onEvent() { } }",
    );
    assert_ast(&program).statement_count(1).statement(0, |s| {
        s.assert_class()
            .name("Listener")
            .annotated_with("background")
            .member_count(1);
    });
}

#[test]
fn test_app_sample_shape() {
    let program = McSources::get_program("060-app.mc").unwrap();

    assert_ast(&program)
        .statement_count(4)
        .statement(3, |s| {
            s.assert_class()
                .name("SpeedView")
                .has_heritage()
                .member_count(6)
                .field(0, |f| {
                    f.name("_speed").modifier(Modifier::Private).has_type();
                })
                .field(1, |f| {
                    f.name("_label").modifier(Modifier::Private).has_type();
                })
                .method(2, |m| {
                    m.name("initialize").parameter_count(0);
                })
                .method(3, |m| {
                    m.name("onLayout").parameter_count(1).has_return_type();
                })
                .method(4, |m| {
                    m.name("onUpdate").parameter_count(1).has_return_type();
                })
                .method(5, |m| {
                    m.name("setSpeed").parameter_count(1).has_return_type();
                });
        });
}
