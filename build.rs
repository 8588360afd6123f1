use std::env;
use std::process::Command;

// CPU features that back a lane representation in this crate
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    // spelling used by rustc in CARGO_CFG_TARGET_FEATURE
    target_feature: &'static str,
    cfg_flag: &'static str,
    // architectures the backend compiles on
    arches: &'static [&'static str],
    detected: bool,
}

impl CpuFeature {
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse4_1",
                target_feature: "sse4.1",
                cfg_flag: "sse",
                arches: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "avx2",
                target_feature: "avx2",
                cfg_flag: "avx2",
                arches: &["x86", "x86_64"],
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_feature: "neon",
                cfg_flag: "neon",
                arches: &["aarch64"],
                detected: false,
            },
        ]
    }

    fn applies_to(&self, target_arch: &str) -> bool {
        self.arches.contains(&target_arch)
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                // aarch64 kernels report NEON as "asimd"
                feature.detected |= match feature.name {
                    "neon" => contents.contains("asimd") || contents.contains("neon"),
                    name => contents.contains(name),
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                feature.detected |= match feature.name {
                    "avx2" => contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_1" => contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => contents.contains("hw.optional.neon: 1"),
                    _ => false,
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// No windows detector for now: native Windows builds rely on CARGO_CFG_TARGET_FEATURE

struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    // Features the compiler was explicitly told to target (-C target-feature / target-cpu)
    fn detect_target_features(features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.detected |= enabled.contains(&feature.target_feature);
        }
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str) {
        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(lane4)");
        println!("cargo::rustc-check-cfg=cfg(lane8)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");

        // NEON is part of the aarch64 baseline
        if target_arch == "aarch64" {
            if let Some(neon) = features.iter_mut().find(|f| f.name == "neon") {
                neon.detected = true;
            }
        }

        let enabled: Vec<&'static str> = features
            .iter()
            .filter(|f| f.detected && f.applies_to(target_arch))
            .map(|f| f.cfg_flag)
            .collect();

        for cfg_flag in &enabled {
            println!("cargo:rustc-cfg={cfg_flag}");
        }

        // 4-wide lanes need SSE4.1 or NEON, 8-wide lanes need AVX2 or NEON register pairs
        let lane4 = enabled.contains(&"sse") || enabled.contains(&"neon");
        let lane8 = enabled.contains(&"avx2") || enabled.contains(&"neon");

        if lane4 {
            println!("cargo:rustc-cfg=lane4");
        }
        if lane8 {
            println!("cargo:rustc-cfg=lane8");
        }
        if !lane4 && !lane8 {
            println!("cargo:rustc-cfg=fallback");
        }

        println!("applying: {enabled:?} (lane4: {lane4}, lane8: {lane8})");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut features = CpuFeature::features();

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only probe the running CPU for native builds
    if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::detect_target_features(&mut features);

    PlatformDetector::apply(&mut features, &target_arch);
}
