//! Built-in probe catalog.
//!
//! One reference probe per supported language, embedded as source text. The
//! catalog is closed: the contract is the product, not a plugin surface, so
//! user-supplied probe sources are deliberately not accepted.

use crate::config::types::{HarnessError, Result};
use crate::probe::canonical::CanonicalOp;
use crate::probe::contract::ProbeSpec;

const C_PROBE: &str = r#"#include <stdio.h>
#include <stdlib.h>

typedef struct {
    const char *name;
    int age;
} Record;

int main(void) {
    Record r = {"Alice", 30};
    printf("Record: name=%s age=%d\n", r.name, r.age);

    int *seq = malloc(5 * sizeof(int));
    if (seq == NULL) {
        return 1;
    }
    for (int i = 0; i < 5; i++) {
        seq[i] = i * i;
    }
    printf("Squares:");
    for (int i = 0; i < 5; i++) {
        printf(" %d", seq[i]);
    }
    printf("\n");
    free(seq);

    printf("✓ c probe passed\n");
    return 0;
}
"#;

const CPP_PROBE: &str = r#"#include <algorithm>
#include <cstdio>
#include <memory>
#include <vector>

namespace {

class Shape {
public:
    virtual ~Shape() = default;
    virtual double area() const = 0;
};

class Circle final : public Shape {
public:
    explicit Circle(double radius) : radius_(radius) {}
    double area() const override { return 3.14159 * radius_ * radius_; }

private:
    double radius_;
};

struct Record {
    const char *name;
    int age;
};

}  // namespace

int main() {
    Record r{"Alice", 30};
    std::printf("Record: name=%s age=%d\n", r.name, r.age);

    std::vector<int> seq{0, 1, 2, 3, 4};
    std::transform(seq.begin(), seq.end(), seq.begin(), [](int v) { return v * v; });
    std::printf("Squares:");
    for (int v : seq) {
        std::printf(" %d", v);
    }
    std::printf("\n");

    std::unique_ptr<Shape> shape = std::make_unique<Circle>(5.0);
    std::printf("Circle area: %.4f\n", shape->area());

    std::printf("✓ cpp probe passed\n");
    return 0;
}
"#;

const PYTHON_PROBE: &str = r#"import math
from dataclasses import dataclass


@dataclass
class Record:
    name: str
    age: int


class Circle:
    def __init__(self, radius):
        self.radius = radius

    def area(self):
        return math.pi * self.radius * self.radius


def main():
    record = Record("Alice", 30)
    print(f"Record: name={record.name} age={record.age}")

    squares = [i * i for i in range(5)]
    print("Squares: " + " ".join(str(v) for v in squares))

    shape = Circle(5.0)
    print(f"Circle area: {shape.area():.4f}")

    print("✓ python probe passed")


if __name__ == "__main__":
    main()
"#;

const JAVA_PROBE: &str = r#"import java.util.stream.IntStream;

public class Probe {
    record Person(String name, int age) {}

    sealed interface Shape permits Circle {}

    record Circle(double radius) implements Shape {}

    static double area(Shape shape) {
        return switch (shape) {
            case Circle c -> Math.PI * c.radius() * c.radius();
        };
    }

    public static void main(String[] args) {
        Person person = new Person("Alice", 30);
        System.out.println("Record: name=" + person.name() + " age=" + person.age());

        int[] squares = IntStream.range(0, 5).map(i -> i * i).toArray();
        StringBuilder line = new StringBuilder("Squares:");
        for (int v : squares) {
            line.append(' ').append(v);
        }
        System.out.println(line);

        System.out.printf("Circle area: %.4f%n", area(new Circle(5.0)));

        System.out.println("✓ java probe passed");
    }
}
"#;

/// All built-in probes, ordered by language tag.
pub const PROBES: &[ProbeSpec] = &[
    ProbeSpec {
        language: "c",
        source_file: "probe.c",
        source: C_PROBE,
        operations: &[CanonicalOp::RecordConstruction, CanonicalOp::SequenceAllocation],
    },
    ProbeSpec {
        language: "cpp",
        source_file: "probe.cpp",
        source: CPP_PROBE,
        operations: &[
            CanonicalOp::RecordConstruction,
            CanonicalOp::SequenceTransform,
            CanonicalOp::DynamicDispatch,
        ],
    },
    ProbeSpec {
        language: "java",
        source_file: "Probe.java",
        source: JAVA_PROBE,
        operations: &[
            CanonicalOp::RecordConstruction,
            CanonicalOp::SequenceAllocation,
            CanonicalOp::DynamicDispatch,
        ],
    },
    ProbeSpec {
        language: "python",
        source_file: "probe.py",
        source: PYTHON_PROBE,
        operations: &[
            CanonicalOp::RecordConstruction,
            CanonicalOp::SequenceAllocation,
            CanonicalOp::DynamicDispatch,
        ],
    },
];

/// Language tags of every built-in probe, in catalog order.
pub fn languages() -> Vec<&'static str> {
    PROBES.iter().map(|p| p.language).collect()
}

/// Look up a probe by its canonical language tag (no alias handling here;
/// aliases are normalized by the adapter registry).
pub fn probe_for(language: &str) -> Result<&'static ProbeSpec> {
    PROBES
        .iter()
        .find(|p| p.language == language)
        .ok_or_else(|| HarnessError::UnsupportedLanguage(language.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::marker;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let tags = languages();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_every_probe_declares_operations() {
        for probe in PROBES {
            assert!(!probe.operations.is_empty(), "{} has no operations", probe.language);
        }
    }

    #[test]
    fn test_every_probe_embeds_a_marker_line() {
        for probe in PROBES {
            let marker_lines: Vec<&str> = probe
                .source
                .lines()
                .filter(|l| marker::is_marker_line(l))
                .collect();
            // Source-level check: exactly one line of the program text prints
            // the marker (the java/python sources quote it inside a print).
            assert_eq!(
                marker_lines.len(),
                1,
                "{} must embed exactly one marker line",
                probe.language
            );
        }
    }

    #[test]
    fn test_probe_for_rejects_unknown_tag() {
        assert!(probe_for("cobol").is_err());
        assert!(probe_for("c").is_ok());
    }

    #[test]
    fn test_fingerprints_are_distinct() {
        let mut fingerprints: Vec<String> = PROBES.iter().map(|p| p.fingerprint()).collect();
        fingerprints.sort();
        fingerprints.dedup();
        assert_eq!(fingerprints.len(), PROBES.len());
    }

    #[test]
    fn test_sources_end_with_newline() {
        for probe in PROBES {
            assert!(probe.source.ends_with('\n'), "{} source misses trailing newline", probe.language);
        }
    }
}
