use std::{io::Write, path::PathBuf};

use crate::{
    capture::capture_rect,
    display::{Display, DisplayInfo},
    error::{SckError, SckResult},
    geometry::{Rect, union_all},
    options::CaptureOptions,
    writer::{ALL_FILE_NAME, display_file_name, save_png},
};

/// One capture the run performs and the file it ends up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureJob {
    pub index: usize,
    pub bounds: Rect,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePlan {
    pub displays: Vec<CaptureJob>,
    /// Union of every display's bounds.
    pub all: Rect,
}

impl CapturePlan {
    pub fn new(infos: &[DisplayInfo]) -> SckResult<CapturePlan> {
        if infos.is_empty() {
            return Err(SckError::NoDisplays);
        }

        let displays: Vec<CaptureJob> = infos
            .iter()
            .enumerate()
            .map(|(index, info)| {
                let bounds = info.bounds();
                CaptureJob {
                    index,
                    bounds,
                    file_name: display_file_name(index, bounds.width(), bounds.height()),
                }
            })
            .collect();

        let all = union_all(displays.iter().map(|job| &job.bounds));

        Ok(CapturePlan { displays, all })
    }
}

/// Captures every display and then the whole desktop, printing progress to `out`.
///
/// Returns the written files in order. The first failure aborts the run.
pub fn run<W: Write>(options: &CaptureOptions, out: &mut W) -> SckResult<Vec<PathBuf>> {
    let infos: Vec<DisplayInfo> = Display::all()?
        .iter()
        .map(Display::info)
        .collect();
    let plan = CapturePlan::new(&infos)?;

    let mut written = Vec::with_capacity(plan.displays.len() + 1);

    for job in &plan.displays {
        let image = capture_rect(job.bounds, options)?;
        let path = options.output_dir.join(&job.file_name);
        save_png(&image, &path)?;

        writeln!(out, "#{} : {} \"{}\"", job.index, job.bounds, job.file_name)?;
        written.push(path);
    }

    writeln!(out, "{}", plan.all)?;
    let image = capture_rect(plan.all, options)?;
    let path = options.output_dir.join(ALL_FILE_NAME);
    save_png(&image, &path)?;
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_names_and_union() {
        let infos = [
            DisplayInfo {
                id: 1,
                x: 0,
                y: 0,
                width: 1512,
                height: 982,
            },
            DisplayInfo {
                id: 2,
                x: 1512,
                y: -300,
                width: 2560,
                height: 1440,
            },
        ];

        let plan = CapturePlan::new(&infos).unwrap();

        assert_eq!(
            plan.displays,
            vec![
                CaptureJob {
                    index: 0,
                    bounds: Rect::new(0, 0, 1512, 982),
                    file_name: "0_1512x982.png".to_string(),
                },
                CaptureJob {
                    index: 1,
                    bounds: Rect::new(1512, -300, 4072, 1140),
                    file_name: "1_2560x1440.png".to_string(),
                },
            ]
        );
        assert_eq!(plan.all, Rect::new(0, -300, 4072, 1140));
        assert_eq!(plan.all.to_string(), "(0,-300)-(4072,1140)");
    }

    #[test]
    fn plan_without_displays_fails() {
        assert!(matches!(CapturePlan::new(&[]), Err(SckError::NoDisplays)));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn run_without_displays_fails() {
        let mut out = Vec::new();
        let result = run(&CaptureOptions::default(), &mut out);

        assert!(matches!(result, Err(SckError::NoDisplays)));
        assert!(out.is_empty());
    }
}
