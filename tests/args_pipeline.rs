//! Integration tests for the args pipeline module.

mod common;

use common::{app_processor, at, raw_args, temp_argfile};
use launchargs::args::{
    expand_command_line, ArgProcessor, EnvSource, ExpandedArgs, Expansion, LauncherArgState,
    OptionRegistry,
};
use launchargs::config::LauncherMode;

fn expand(raw: &[String]) -> ExpandedArgs {
    expand_command_line(
        &mut ArgProcessor::default(),
        LauncherMode::Application,
        false,
        "java",
        EnvSource::Disabled,
        raw,
    )
    .unwrap()
}

// =============================================================================
// CLASSIFIER TESTS
// =============================================================================

#[test]
fn classify_jar_boundary_points_at_first_app_arg() {
    let registry = OptionRegistry::default();
    let mut state = LauncherArgState::new();
    state.init(LauncherMode::Application, false);
    for arg in ["-jar", "app.jar", "arg1"] {
        state.classify(arg, &registry);
    }

    let argv = ["java", "-jar", "app.jar", "arg1"];
    let index = state.app_arg_index().unwrap();
    assert_eq!(argv[index], "arg1");
    assert_eq!(index, 3);
}

#[test]
fn classify_same_order_twice_is_stable() {
    let registry = OptionRegistry::default();
    let run = || {
        let mut state = LauncherArgState::new();
        state.init(LauncherMode::Application, false);
        for arg in ["-cp", "a.jar", "Main", "x"] {
            state.classify(arg, &registry);
        }
        state.app_arg_index()
    };
    assert_eq!(run(), Some(4));
    assert_eq!(run(), run());
}

// =============================================================================
// PREPROCESS TESTS
// =============================================================================

#[test]
fn argfile_tokens_are_classified_as_read() {
    let (_dir, path) = temp_argfile("opts", "-cp lib.jar\ncom.example.Main\n");
    let mut p = app_processor();

    let expansion = p.preprocess(&at(&path)).unwrap();
    assert_eq!(
        expansion,
        Expansion::Expanded(raw_args(vec!["-cp", "lib.jar", "com.example.Main"]))
    );
    assert_eq!(p.state().args_count(), 4);
    assert_eq!(p.app_arg_index(), Some(4));
}

#[test]
fn argfile_after_boundary_is_not_expanded() {
    let mut p = app_processor();
    p.preprocess("Main").unwrap();
    assert_eq!(p.preprocess("@/no/such/file").unwrap(), Expansion::NotExpanded);
}

// =============================================================================
// PIPELINE TESTS
// =============================================================================

#[test]
fn pipeline_expands_in_order() {
    let (_dir, path) = temp_argfile("opts", "-Xmx1g\n-cp 'my libs/a.jar'\n");
    let result = expand(&raw_args(vec![&at(&path), "Main", "@app-arg"]));

    assert_eq!(
        result.args,
        vec!["java", "-Xmx1g", "-cp", "my libs/a.jar", "Main", "@app-arg"]
    );
    assert_eq!(result.app_arg_index, Some(5));
    assert_eq!(result.args[5], "@app-arg");
}

#[test]
fn pipeline_jar_argument_from_argfile() {
    let (_dir, path) = temp_argfile("jar", "app.jar");
    let result = expand(&raw_args(vec!["-jar", &at(&path), "arg1"]));
    assert_eq!(result.args, vec!["java", "-jar", "app.jar", "arg1"]);
    assert_eq!(result.app_arg_index, Some(3));
}

#[test]
fn pipeline_module_option_does_not_stop_expansion() {
    let (_dir, path) = temp_argfile("opts", "-Xss1m Main\n");
    let result = expand(&raw_args(vec!["--module=app/app.Main", &at(&path), "x"]));
    assert_eq!(
        result.args,
        vec!["java", "--module=app/app.Main", "-Xss1m", "Main", "x"]
    );
    assert_eq!(result.app_arg_index, Some(4));
}

#[test]
fn pipeline_escaped_at() {
    let result = expand(&raw_args(vec!["-Dx=1", "@@literal"]));
    assert_eq!(result.args, vec!["java", "-Dx=1", "@literal"]);
}

#[test]
fn pipeline_disable_flag_stops_later_expansion() {
    let result = expand(&raw_args(vec!["--disable-@files", "@not-a-file", "Main"]));
    assert_eq!(result.args, vec!["java", "--disable-@files", "@not-a-file", "Main"]);
    // `@not-a-file` has no dash, so it is taken as the main class.
    assert_eq!(result.app_arg_index, Some(3));
}

#[test]
fn pipeline_tool_mode_expands_everything() {
    let (_dir, path) = temp_argfile("opts", "-g Foo.java");
    let result = expand_command_line(
        &mut ArgProcessor::default(),
        LauncherMode::Tool,
        false,
        "javac",
        EnvSource::Disabled,
        &raw_args(vec!["Bar.java", &at(&path)]),
    )
    .unwrap();
    assert_eq!(result.args, vec!["javac", "Bar.java", "-g", "Foo.java"]);
    assert_eq!(result.app_arg_index, Some(0));
}

#[test]
fn pipeline_relaunch_does_not_expand() {
    let (_dir, path) = temp_argfile("opts", "-Dx=1");
    let mut processor = ArgProcessor::default();
    let raw = raw_args(vec![&at(&path), "Main"]);

    let first = expand_command_line(
        &mut processor,
        LauncherMode::Application,
        false,
        "java",
        EnvSource::Value("OPTS", Some("-Dy=2")),
        &raw,
    )
    .unwrap();
    assert_eq!(first.args, vec!["java", "-Dy=2", "-Dx=1", "Main"]);

    let second = expand_command_line(
        &mut processor,
        LauncherMode::Application,
        false,
        "java",
        EnvSource::Value("OPTS", Some("-Dy=2")),
        &raw,
    )
    .unwrap();
    assert!(processor.state().is_relaunch());
    assert_eq!(second.args, vec!["java".to_string(), at(&path), "Main".to_string()]);
    assert!(second.notes.is_empty());
}

#[test]
fn pipeline_missing_argfile_is_fatal() {
    let err = expand_command_line(
        &mut ArgProcessor::default(),
        LauncherMode::Application,
        false,
        "java",
        EnvSource::Disabled,
        &raw_args(vec!["@/no/such/argfile"]),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Error: could not open `/no/such/argfile'");
}
