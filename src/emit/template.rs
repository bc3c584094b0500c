//! Fixed source-text templates for the generated runner.
//!
//! The master template is static C text with named `{...}` insertion points;
//! everything outside the insertion points is copied verbatim into the
//! output. [`render`] is the only substitution mechanism, keeping template
//! structure fully decoupled from fragment generation.

/// One generated test function. `{test_name}` comes from the mangler,
/// `{test_args}` is the comma-joined rendered command.
pub const FUNCTION_TEMPLATE: &str = "
static int {test_name}() {
    return systemf1({test_args});
}
";

/// The dispatch table. `{test_functions}` is one indented `name,` row per
/// test, in manifest order.
pub const TABLE_TEMPLATE: &str = "
int (*(test_func_table[]))(void) = {
{test_functions}
};
";

/// The complete runner. Insertion points: `{max_tests}`, `{test_funcs}`,
/// `{test_funcs_table}`, `{usage_tests}`.
pub const RUNNER_TEMPLATE: &str = r#"/*
 * DO NOT EDIT THIS FILE.
 * This file was generated by testgen from tests/test.json.
 * Any changes should be made there.
 * DO NOT EDIT THIS FILE.
 */

#include <signal.h>
#include <stdio.h>
#include <stdlib.h>
#include <unistd.h>
#include <string.h>

#include "../src/systemf.h"

#define TEST_COUNT {max_tests}

static void sigsegv_handler(int signo) {
    fputs("Test aborted due to a SEGV\n", stderr);
    exit(EXIT_FAILURE);
}

static void sanity_check_tests_dir(void) {
    const size_t bufsize = 4096;
    char *buf = malloc(bufsize);
    if (!buf) {
        fprintf(stderr, "Test aborted because %zu bytes were not available.\n", bufsize);
        exit(EXIT_FAILURE);
    }

    char *cwd = getcwd(buf, bufsize);
    if (!cwd) {
        fputs("Test aborted because current working directory could not be extracted\n", stderr);
        exit(EXIT_FAILURE);
    }

    char *tests = NULL;
    for (char *s = strstr(cwd, "tests"); s; s = strstr(s + 5, "tests")) {
        tests = s;
    }
    if (!tests || (tests - cwd) < (strlen(cwd) - 6)) {
        fputs("This command must be run in the tests directory.\n", stderr);
        exit(EXIT_FAILURE);
    }
}
{test_funcs}
{test_funcs_table}
static void usage() {
    puts("usage: test-runner <testnum>");
    puts("");
    puts("testnum: Test Description");
{usage_tests}}

int main(int argc, const char *argv[]) {
    int index = 0;
    if (argc == 2) {
        index = atoi(argv[1]);
    }

    if (index == 0 || index > TEST_COUNT) {
        usage();
        exit(EXIT_FAILURE);
    }

    sanity_check_tests_dir();

    if (signal(SIGSEGV, sigsegv_handler) == SIG_ERR) {
        fputs("An error occurred while setting a signal handler.\n", stderr);
        return EXIT_FAILURE;
    }

    return test_func_table[index - 1]();
}
"#;

/// Substitutes named fragments into `template`.
///
/// Insertion points are `{name}` markers. Replacement sites are located in
/// the pristine template before any substitution happens, so fragment text
/// is never re-scanned for markers. Markers with no matching fragment are
/// left in place; fragments with no matching marker are ignored.
pub fn render(template: &str, fragments: &[(&str, &str)]) -> String {
    let mut sites: Vec<(usize, &str, &str)> = fragments
        .iter()
        .filter_map(|&(name, text)| {
            let marker = format!("{{{name}}}");
            template.find(&marker).map(|pos| (pos, name, text))
        })
        .collect();
    sites.sort_unstable_by_key(|&(pos, _, _)| pos);

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    for (pos, name, text) in sites {
        out.push_str(&template[cursor..pos]);
        out.push_str(text);
        cursor = pos + name.len() + 2;
    }
    out.push_str(&template[cursor..]);
    out
}
