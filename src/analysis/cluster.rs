// ============================================================
// LineClusterer
// ============================================================
// Groups the classified lines of a work-history section into
// employers with their titles and dates.
//
//   1. every EMPL line opens a cluster
//   2. a TITL joins the last cluster whose EMPL line comes
//      before it; a TITL with none is dropped
//   3. the title's date is, in order of precedence:
//        the line after the title, if DATE
//        the line before the title, if DATE
//        the line after the employer, if DATE
//        two lines after the employer, if that line is UNKN
//        and the one after it DATE
//
// Only HEAD_WORK sections are clustered; any other section
// yields no clusters.

use crate::domain::employer::{EmployerCluster, TitleRecord};
use crate::domain::label::ClassLabel;
use crate::domain::section::ClassifiedLine;

/// Cluster the lines of a section of type `section`.
pub fn cluster_lines(lines: &[ClassifiedLine], section: ClassLabel) -> Vec<EmployerCluster> {
    if section != ClassLabel::HeadWork {
        tracing::debug!("No clustering for {} sections", section);
        return Vec::new();
    }

    // (position in `lines`, line_index) of every employer
    let mut employers: Vec<(usize, usize)> = Vec::new();
    let mut clusters:  Vec<EmployerCluster> = Vec::new();
    for (pos, line) in lines.iter().enumerate() {
        if line.label == ClassLabel::Empl {
            employers.push((pos, line.line_index));
            clusters.push(EmployerCluster::new(line.text.as_str()));
        }
    }

    let label_at = |pos: usize| lines.get(pos).map(|l| l.label);
    let date_at  = |pos: usize| {
        lines
            .get(pos)
            .filter(|l| l.label == ClassLabel::Date)
            .map(|l| l.text.clone())
    };

    for (n, line) in lines.iter().enumerate() {
        if line.label != ClassLabel::Titl {
            continue;
        }

        let Some(owner) = employers.iter().rposition(|&(_, index)| index < line.line_index) else {
            tracing::debug!("Dropping title {:?} with no employer above it", line.text);
            continue;
        };

        let mut title = TitleRecord::new(line.text.as_str());
        if let Some(before) = n.checked_sub(1).and_then(date_at) {
            title.date = Some(before);
        }
        if let Some(after) = date_at(n + 1) {
            title.date = Some(after);
        }
        if title.date.is_none() {
            let emp_pos = employers[owner].0;
            title.date = date_at(emp_pos + 1).or_else(|| {
                (label_at(emp_pos + 1) == Some(ClassLabel::Unkn))
                    .then(|| date_at(emp_pos + 2))
                    .flatten()
            });
        }

        clusters[owner].titles.push(title);
    }

    clusters
}
