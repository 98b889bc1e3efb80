use std::collections::BTreeMap;

use crate::constants::DEFAULT_SPACER_GAP;
use crate::crispr::{CrisprNickase, CrisprNuclease, PamSide, RelativeStrand};
use crate::editor::{BaseEditor, EditingWeights, Substitution};
use crate::errors::*;
use crate::nuclease::{MotifSpecs, Nuclease, TargetType};

/// Capabilities shared by every kind of nuclease.
pub trait Capabilities {
    fn nuclease(&self) -> &Nuclease;

    fn crispr(&self) -> Option<&CrisprNuclease> {
        None
    }

    fn nicking_strand(&self) -> Option<RelativeStrand> {
        None
    }

    fn editor(&self) -> Option<&BaseEditor> {
        None
    }
}

impl Capabilities for Nuclease {
    fn nuclease(&self) -> &Nuclease {
        self
    }
}

impl Capabilities for CrisprNuclease {
    fn nuclease(&self) -> &Nuclease {
        CrisprNuclease::nuclease(self)
    }

    fn crispr(&self) -> Option<&CrisprNuclease> {
        Some(self)
    }
}

impl Capabilities for CrisprNickase {
    fn nuclease(&self) -> &Nuclease {
        CrisprNickase::crispr(self).nuclease()
    }

    fn crispr(&self) -> Option<&CrisprNuclease> {
        Some(CrisprNickase::crispr(self))
    }

    fn nicking_strand(&self) -> Option<RelativeStrand> {
        Some(CrisprNickase::nicking_strand(self))
    }
}

impl Capabilities for BaseEditor {
    fn nuclease(&self) -> &Nuclease {
        BaseEditor::crispr(self).nuclease()
    }

    fn crispr(&self) -> Option<&CrisprNuclease> {
        Some(BaseEditor::crispr(self))
    }

    fn editor(&self) -> Option<&BaseEditor> {
        Some(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Enzyme {
    Nuclease(Nuclease),
    Crispr(CrisprNuclease),
    Nickase(CrisprNickase),
    BaseEditor(BaseEditor),
}

impl Capabilities for Enzyme {
    fn nuclease(&self) -> &Nuclease {
        match self {
            Enzyme::Nuclease(nuclease) => nuclease,
            Enzyme::Crispr(crispr) => crispr.nuclease(),
            Enzyme::Nickase(nickase) => nickase.crispr().nuclease(),
            Enzyme::BaseEditor(editor) => editor.crispr().nuclease(),
        }
    }

    fn crispr(&self) -> Option<&CrisprNuclease> {
        match self {
            Enzyme::Nuclease(_) => None,
            Enzyme::Crispr(crispr) => Some(crispr),
            Enzyme::Nickase(nickase) => Some(nickase.crispr()),
            Enzyme::BaseEditor(editor) => Some(editor.crispr()),
        }
    }

    fn nicking_strand(&self) -> Option<RelativeStrand> {
        match self {
            Enzyme::Nickase(nickase) => Some(nickase.nicking_strand()),
            _ => None,
        }
    }

    fn editor(&self) -> Option<&BaseEditor> {
        match self {
            Enzyme::BaseEditor(editor) => Some(editor),
            _ => None,
        }
    }
}

impl From<Nuclease> for Enzyme {
    fn from(nuclease: Nuclease) -> Enzyme {
        Enzyme::Nuclease(nuclease)
    }
}

impl From<CrisprNuclease> for Enzyme {
    fn from(crispr: CrisprNuclease) -> Enzyme {
        Enzyme::Crispr(crispr)
    }
}

impl From<CrisprNickase> for Enzyme {
    fn from(nickase: CrisprNickase) -> Enzyme {
        Enzyme::Nickase(nickase)
    }
}

impl From<BaseEditor> for Enzyme {
    fn from(editor: BaseEditor) -> Enzyme {
        Enzyme::BaseEditor(editor)
    }
}

impl Enzyme {
    /// Looks up a built-in enzyme by (case-insensitive) name.
    pub fn get(name: &str) -> Option<Enzyme> {
        REGISTRY.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Names of all built-in enzymes, sorted case-insensitively.
    pub fn names() -> Vec<&'static str> {
        REGISTRY.values().map(|enzyme| enzyme.name()).collect()
    }

    pub fn all() -> impl Iterator<Item = &'static Enzyme> {
        REGISTRY.values()
    }

    pub fn name(&self) -> &str {
        self.nuclease().name()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Enzyme::Nuclease(_) => "Nuclease",
            Enzyme::Crispr(_) => "CrisprNuclease",
            Enzyme::Nickase(_) => "CrisprNickase",
            Enzyme::BaseEditor(_) => "BaseEditor",
        }
    }
}

lazy_static! {
    static ref REGISTRY: BTreeMap<String, Enzyme> = {
        let mut registry = BTreeMap::new();
        for enzyme in builtin_enzymes().expect("invalid built-in enzyme definition") {
            registry.insert(enzyme.name().to_ascii_lowercase(), enzyme);
        }

        registry
    };
}

fn metadata(description: &str) -> BTreeMap<String, String> {
    let mut metadata = BTreeMap::new();
    metadata.insert("description".to_owned(), description.to_owned());
    metadata
}

fn restriction_enzyme(name: &str, site: &str) -> Result<Enzyme> {
    let nuclease = Nuclease::new(
        name,
        TargetType::Dna,
        MotifSpecs::notation(&[site]),
        None,
        metadata("Type II restriction enzyme"),
    )?;

    Ok(nuclease.into())
}

fn crispr_nuclease(
    name: &str,
    target_type: TargetType,
    pams: &[&str],
    weights: Option<Vec<f64>>,
    pam_side: PamSide,
    spacer_length: usize,
    description: &str,
) -> Result<CrisprNuclease> {
    let nuclease = Nuclease::new(
        name,
        target_type,
        MotifSpecs::notation(pams),
        weights,
        metadata(description),
    )?;

    CrisprNuclease::new(nuclease, pam_side, spacer_length, DEFAULT_SPACER_GAP)
}

fn spcas9() -> Result<CrisprNuclease> {
    crispr_nuclease(
        "SpCas9",
        TargetType::Dna,
        &["(3/3)NGG", "(3/3)NAG", "(3/3)NGA"],
        Some(vec![1.0, 0.2593, 0.0694]),
        PamSide::ThreePrime,
        20,
        "Wildtype Streptococcus pyogenes Cas9 (SpCas9) nuclease",
    )
}

fn editor_weights(
    substitution: &str,
    first_position: isize,
    weights: &[f64],
) -> Result<Vec<(Substitution, isize, f64)>> {
    let substitution = substitution.parse::<Substitution>()?;

    Ok(weights
        .iter()
        .enumerate()
        .map(|(idx, &weight)| (substitution, first_position + idx as isize, weight))
        .collect())
}

fn builtin_enzymes() -> Result<Vec<Enzyme>> {
    let spcas9 = spcas9()?;

    let mut be4max_weights = editor_weights(
        "C2T",
        -20,
        &[0.05, 0.15, 0.45, 0.80, 0.95, 1.00, 0.90, 0.60, 0.30, 0.10, 0.03],
    )?;
    be4max_weights.extend(editor_weights("C2G", -17, &[0.02, 0.04, 0.05, 0.04, 0.02])?);
    be4max_weights.extend(editor_weights("C2A", -17, &[0.01, 0.02, 0.02, 0.01])?);

    let abe8e_weights = editor_weights(
        "A2G",
        -20,
        &[0.10, 0.35, 0.75, 0.95, 1.00, 1.00, 0.90, 0.70, 0.40, 0.15, 0.05],
    )?;

    Ok(vec![
        spcas9.clone().into(),
        crispr_nuclease(
            "SpCas9-NG",
            TargetType::Dna,
            &["(3/3)NGN"],
            None,
            PamSide::ThreePrime,
            20,
            "Engineered SpCas9 variant recognizing NG PAM sequences",
        )?
        .into(),
        crispr_nuclease(
            "SaCas9",
            TargetType::Dna,
            &["(3/3)NNGRRT", "(3/3)NNGRRN"],
            Some(vec![1.0, 0.2]),
            PamSide::ThreePrime,
            21,
            "Wildtype Staphylococcus aureus Cas9 (SaCas9) nuclease",
        )?
        .into(),
        crispr_nuclease(
            "AsCas12a",
            TargetType::Dna,
            &["TTTV(18/23)"],
            None,
            PamSide::FivePrime,
            23,
            "Wildtype Acidaminococcus Cas12a (AsCas12a) nuclease",
        )?
        .into(),
        crispr_nuclease(
            "enAsCas12a",
            TargetType::Dna,
            &["TTYN(18/23)", "VTTV(18/23)", "TRTV(18/23)"],
            None,
            PamSide::FivePrime,
            23,
            "Enhanced Acidaminococcus Cas12a (enAsCas12a) nuclease",
        )?
        .into(),
        crispr_nuclease(
            "LbCas12a",
            TargetType::Dna,
            &["TTTV(18/23)"],
            None,
            PamSide::FivePrime,
            23,
            "Wildtype Lachnospiraceae bacterium Cas12a (LbCas12a) nuclease",
        )?
        .into(),
        crispr_nuclease(
            "CasRx",
            TargetType::Rna,
            &["N"],
            None,
            PamSide::ThreePrime,
            23,
            "RfxCas13d (CasRx) RNA-targeting nuclease",
        )?
        .into(),
        CrisprNickase::new(spcas9.with_name("SpCas9n-D10A")?, RelativeStrand::Opposite).into(),
        CrisprNickase::new(spcas9.with_name("SpCas9n-H840A")?, RelativeStrand::Original).into(),
        BaseEditor::new(
            spcas9.with_name("BE4max")?,
            RelativeStrand::Original,
            EditingWeights::new(be4max_weights)?,
        )?
        .into(),
        BaseEditor::new(
            spcas9.with_name("ABE8e")?,
            RelativeStrand::Original,
            EditingWeights::new(abe8e_weights)?,
        )?
        .into(),
        restriction_enzyme("EcoRI", "G^AATTC")?,
        restriction_enzyme("BamHI", "G^GATCC")?,
        restriction_enzyme("HindIII", "A^AGCTT")?,
        restriction_enzyme("KpnI", "GGTAC^C")?,
        restriction_enzyme("PstI", "CTGCA^G")?,
        restriction_enzyme("NotI", "GC^GGCCGC")?,
        restriction_enzyme("EcoRV", "GAT^ATC")?,
        restriction_enzyme("BsaI", "GGTCTC(1/5)")?,
        restriction_enzyme("BsmBI", "CGTCTC(1/5)")?,
        restriction_enzyme("BbsI", "GAAGAC(2/6)")?,
    ])
}
