//! End-to-end tests producing complete mock files.

use cmockgen_codegen::{FunctionHook, GenerationContext, MockGenerator, Plugin, PluginSet};
use cmockgen_core::{Error, FunctionDescriptor, MockConfig, ModuleName, ParsedHeader, Result};

fn generator_for(module: &str, plugins: PluginSet) -> MockGenerator {
    let config = MockConfig::default();
    let context = GenerationContext::resolve(&config, ModuleName::new(module)).unwrap();
    MockGenerator::with_default_returns(context, plugins)
}

#[test]
fn test_header_without_plugins() {
    let generator = generator_for("uart", PluginSet::new());
    let header = generator.create_header(&[]).unwrap();

    assert_eq!(
        header.render(),
        "/* AUTOGENERATED FILE. DO NOT EDIT. */\n\
         #ifndef _MOCKUART_H\n\
         #define _MOCKUART_H\n\
         \n\
         #include \"uart.h\"\n\
         \n\
         void Mockuart_Init(void);\n\
         void Mockuart_Destroy(void);\n\
         void Mockuart_Verify(void);\n\
         \n\
         \n\
         #endif\n"
    );
}

#[test]
fn test_source_without_plugins() {
    let functions = vec![
        FunctionDescriptor::builder("uart_init", "void")
            .args("void", vec![])
            .build(),
        FunctionDescriptor::builder("uart_read", "int")
            .args("char* buf", vec!["char* buf".to_string()])
            .build(),
    ];

    let generator = generator_for("uart", PluginSet::new());
    let source = generator.create_source(&functions).unwrap();

    assert_eq!(
        source.render(),
        "/* AUTOGENERATED FILE. DO NOT EDIT. */\n\
         #include <string.h>\n\
         #include <stdlib.h>\n\
         #include <setjmp.h>\n\
         #include \"unity.h\"\n\
         #include \"Mockuart.h\"\n\
         \n\
         static struct MockuartInstance\n\
         {\n\
         \x20 unsigned char allocFailure;\n\
         } Mock;\n\
         \n\
         extern jmp_buf AbortFrame;\n\
         extern int GlobalExpectOrder;\n\
         extern int GlobalVerifyOrder;\n\
         \n\
         void uart_init(void)\n\
         {\n\
         }\n\
         \n\
         int uart_read(char* buf)\n\
         {\n\
         \x20 int cmock_retval = {0};\n\
         \x20 return cmock_retval;\n\
         }\n\
         \n\
         void Mockuart_Verify(void)\n\
         {\n\
         \x20 TEST_ASSERT_EQUAL(0, Mock.allocFailure);\n\
         }\n\
         \n\
         void Mockuart_Init(void)\n\
         {\n\
         \x20 Mockuart_Destroy();\n\
         }\n\
         \n\
         void Mockuart_Destroy(void)\n\
         {\n\
         \x20 memset(&Mock, 0, sizeof(Mock));\n\
         }\n\
         \n"
    );
}

#[test]
fn test_generate_names_files_after_mock() {
    let header = ParsedHeader::from_json_str(
        r#"{"functions": [
            {"name": "spi_send", "rettype": "int", "args_string": "int b", "args": ["int b"]}
        ]}"#,
    )
    .unwrap();

    let generator = generator_for("spi", PluginSet::new());
    let mock = generator.generate(&header.functions).unwrap();

    assert_eq!(mock.mock_name.as_str(), "Mockspi");
    let paths: Vec<_> = mock.files().map(|file| file.path.as_str()).collect();
    assert_eq!(paths, vec!["Mockspi.h", "Mockspi.c"]);
    assert!(mock.file("Mockspi.c").unwrap().content.contains("int spi_send(int b)\n{\n"));
    assert!(mock.file("Mockspi.h").unwrap().content.ends_with("\n#endif\n"));
}

#[test]
fn test_every_public_symbol_uses_mock_name() {
    let config = MockConfig::builder().mock_prefix("Fake").build();
    let context = GenerationContext::resolve(&config, ModuleName::new("adc")).unwrap();
    let generator = MockGenerator::with_default_returns(context, PluginSet::new());

    let mock = generator.generate(&[]).unwrap();
    let source = &mock.file("Fakeadc.c").unwrap().content;
    let header = &mock.file("Fakeadc.h").unwrap().content;

    for symbol in ["Fakeadc_Init", "Fakeadc_Destroy", "Fakeadc_Verify"] {
        assert!(header.contains(&format!("void {symbol}(void);")));
        assert!(source.contains(&format!("void {symbol}(void)\n{{\n")));
    }
    assert!(source.contains("static struct FakeadcInstance\n"));
    assert!(header.contains("#ifndef _FAKEADC_H\n"));
}

#[test]
fn test_source_steps_run_in_fixed_order() {
    #[derive(Debug)]
    struct Marker;

    impl Plugin for Marker {
        fn name(&self) -> &str {
            "marker"
        }

        fn instance_structure(&self, f: &FunctionDescriptor) -> Result<Vec<String>> {
            Ok(vec![format!("/*struct {}*/\n", f.name())])
        }

        fn mock_verify(&self, f: &FunctionDescriptor) -> Result<Vec<String>> {
            Ok(vec![format!("/*verify {}*/\n", f.name())])
        }

        fn mock_destroy(&self, f: &FunctionDescriptor) -> Result<Vec<String>> {
            Ok(vec![format!("/*destroy {}*/\n", f.name())])
        }

        fn mock_implementation(&self, f: &FunctionDescriptor) -> Result<Vec<String>> {
            Ok(vec![format!("/*impl {}*/\n", f.name())])
        }
    }

    let functions = vec![
        FunctionDescriptor::builder("a", "void").build(),
        FunctionDescriptor::builder("b", "void").build(),
    ];
    let generator = generator_for("order", PluginSet::new().with(Marker));
    let source = generator.create_source(&functions).unwrap().render();

    let markers = [
        "/*struct a*/",
        "/*struct b*/",
        "extern jmp_buf AbortFrame;",
        "/*impl a*/",
        "/*impl b*/",
        "/*verify a*/",
        "/*verify b*/",
        "void Mockorder_Init(void)",
        "/*destroy a*/",
        "/*destroy b*/",
        "memset(&Mock, 0, sizeof(Mock));",
    ];
    let positions: Vec<usize> = markers
        .iter()
        .map(|marker| source.find(marker).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_plugin_failure_aborts_generation() {
    #[derive(Debug)]
    struct Broken;

    impl Plugin for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn mock_destroy(&self, _function: &FunctionDescriptor) -> Result<Vec<String>> {
            Err(Error::InvalidArgument("cannot tear down".to_string()))
        }
    }

    let functions = vec![FunctionDescriptor::builder("a", "int").build()];
    let generator = generator_for("broken", PluginSet::new().with(Broken));

    let err = generator.generate(&functions).unwrap_err();
    assert!(err.is_plugin_error());
    assert!(err.to_string().contains(FunctionHook::MockDestroy.as_str()));
}

#[test]
fn test_generate_is_deterministic() {
    let functions = vec![
        FunctionDescriptor::builder("x", "long")
            .modifier("extern")
            .args("int a, int b", vec!["int a".to_string(), "int b".to_string()])
            .build(),
    ];
    let generator = generator_for("det", PluginSet::new());

    assert_eq!(
        generator.generate(&functions).unwrap(),
        generator.generate(&functions).unwrap()
    );
}
