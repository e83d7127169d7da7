//! Starter project scaffolding.
//!
//! One small, runnable project per toolchain, written into the output
//! directory. Existing files are never touched, so re-running a setup is
//! safe around local edits.

use std::path::Path;

use crate::report::StepResult;

/// One starter project, tied to the tool that makes it runnable.
pub struct SampleSpec {
    /// Tool id that gates this sample.
    pub tool: &'static str,
    /// Directory under the output root.
    pub dir: &'static str,
    /// (relative path, contents) pairs.
    pub files: &'static [(&'static str, &'static str)],
}

const PYTHON_APP: &str = r#"def main():
    print("Hello from Python starter")


if __name__ == '__main__':
    main()
"#;

const PYTHON_REQUIREMENTS: &str = "pytest\n";

const PYTHON_README: &str = "# Python Starter\n\nRun: `python app.py`\n";

const NODE_PACKAGE_JSON: &str = r#"{
  "name": "node-starter",
  "version": "1.0.0",
  "private": true,
  "type": "module",
  "scripts": {
    "start": "node src/index.js"
  }
}
"#;

const NODE_INDEX: &str = "console.log('Hello from Node.js starter');\n";

const JAVA_POM: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>dev.enabler</groupId>
  <artifactId>java-starter</artifactId>
  <version>1.0.0</version>
  <properties>
    <maven.compiler.source>21</maven.compiler.source>
    <maven.compiler.target>21</maven.compiler.target>
  </properties>
</project>
"#;

const JAVA_APP: &str = r#"public class App {
    public static void main(String[] args) {
        System.out.println("Hello from Java starter");
    }
}
"#;

const CPP_MAIN: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello from C++ starter\n";
    return 0;
}
"#;

const CPP_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.16)
project(cpp_starter)
set(CMAKE_CXX_STANDARD 17)
add_executable(cpp_starter main.cpp)
"#;

/// The built-in starter projects, in generation order.
pub fn sample_specs() -> Vec<SampleSpec> {
    vec![
        SampleSpec {
            tool: "python",
            dir: "python-app",
            files: &[
                ("app.py", PYTHON_APP),
                ("requirements.txt", PYTHON_REQUIREMENTS),
                ("README.md", PYTHON_README),
            ],
        },
        SampleSpec {
            tool: "node",
            dir: "node-app",
            files: &[
                ("package.json", NODE_PACKAGE_JSON),
                ("src/index.js", NODE_INDEX),
            ],
        },
        SampleSpec {
            tool: "java",
            dir: "java-app",
            files: &[
                ("pom.xml", JAVA_POM),
                ("src/main/java/App.java", JAVA_APP),
            ],
        },
        SampleSpec {
            tool: "cpp",
            dir: "cpp-app",
            files: &[("main.cpp", CPP_MAIN), ("CMakeLists.txt", CPP_CMAKE)],
        },
    ]
}

/// Generates the starter projects whose gating tool is in `tool_ids`.
///
/// One result per file. Files that already exist are skipped, and a dry run
/// touches nothing at all, not even directories.
pub fn generate(tool_ids: &[&str], output_dir: &Path, dry_run: bool) -> Vec<StepResult> {
    let mut results = Vec::new();
    for spec in sample_specs() {
        if !tool_ids.contains(&spec.tool) {
            continue;
        }
        for (rel, contents) in spec.files {
            let name = format!("{}/{}", spec.dir, rel);
            let result = if dry_run {
                StepResult::skipped(name, None, "dry run")
            } else {
                let path = output_dir.join(spec.dir).join(rel);
                if path.exists() {
                    StepResult::skipped(name, None, "already exists")
                } else {
                    match write_file(&path, contents) {
                        Ok(()) => StepResult::success(name, None),
                        Err(e) => StepResult::failed(name, None, e.to_string()),
                    }
                }
            };
            result.print_line();
            results.push(result);
        }
    }
    results
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;

    #[test]
    fn test_generates_only_matching_samples() {
        let dir = tempfile::tempdir().unwrap();
        let results = generate(&["vscode", "java"], dir.path(), false);
        assert_eq!(results.len(), 2);
        assert!(dir.path().join("java-app").join("pom.xml").exists());
        assert!(dir
            .path()
            .join("java-app")
            .join("src/main/java/App.java")
            .exists());
        assert!(!dir.path().join("python-app").exists());
        assert!(!dir.path().join("node-app").exists());
    }

    #[test]
    fn test_existing_files_survive_a_second_run() {
        let dir = tempfile::tempdir().unwrap();
        generate(&["python"], dir.path(), false);

        // A user edit must survive the next run untouched.
        let app = dir.path().join("python-app").join("app.py");
        std::fs::write(&app, "print('edited')\n").unwrap();
        let results = generate(&["python"], dir.path(), false);

        assert!(results
            .iter()
            .all(|r| matches!(&r.outcome, Outcome::Skipped(reason) if reason == "already exists")));
        assert_eq!(std::fs::read_to_string(&app).unwrap(), "print('edited')\n");
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let results = generate(&["python", "node", "java", "cpp"], dir.path(), true);
        assert_eq!(results.len(), 9);
        assert!(results
            .iter()
            .all(|r| matches!(&r.outcome, Outcome::Skipped(reason) if reason == "dry run")));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_node_sample_contents() {
        let dir = tempfile::tempdir().unwrap();
        generate(&["node"], dir.path(), false);
        let package: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join("node-app").join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(package["name"], "node-starter");
        assert_eq!(package["type"], "module");
        let index =
            std::fs::read_to_string(dir.path().join("node-app").join("src/index.js")).unwrap();
        assert_eq!(index, NODE_INDEX);
    }

    #[test]
    fn test_java_pom_contents() {
        let dir = tempfile::tempdir().unwrap();
        generate(&["java"], dir.path(), false);
        let pom = std::fs::read_to_string(dir.path().join("java-app").join("pom.xml")).unwrap();
        assert_eq!(pom, JAVA_POM);
        // The stub carries no XML declaration and points at the https schema.
        assert!(pom.starts_with("<project xmlns="));
        assert!(pom.contains("https://maven.apache.org/xsd/maven-4.0.0.xsd"));
        assert!(pom.contains("<artifactId>java-starter</artifactId>"));
    }

    #[test]
    fn test_cpp_sample_keeps_escape_literal() {
        let dir = tempfile::tempdir().unwrap();
        generate(&["cpp"], dir.path(), false);
        let main = std::fs::read_to_string(dir.path().join("cpp-app").join("main.cpp")).unwrap();
        // The newline escape belongs to the generated C++ source.
        assert!(main.contains(r#""Hello from C++ starter\n""#));
    }

    #[test]
    fn test_every_sample_gated_by_known_tool() {
        let known = ["python", "node", "java", "cpp"];
        for spec in sample_specs() {
            assert!(known.contains(&spec.tool));
        }
    }
}
