// Line coding schemes: bits -> voltage levels
//
// Unipolar NRZ: 1 -> 1, 0 -> 0
// Polar NRZ-L:  1 -> +1, 0 -> -1
// Bipolar AMI:  0 -> 0, successive 1s alternate +1/-1 (first 1 is +1)
// Manchester:   1 -> [+1, -1], 0 -> [-1, +1]

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::bits::Bit;
use crate::error::LineCodeError;
use crate::waveform::ExpansionMode;

pub type Level = f64;

pub trait LineCode {
    /// Map bits to levels. Every call starts from the scheme's initial state.
    fn encode(&self, bits: &[Bit]) -> Vec<Level>;

    /// Levels produced per input bit
    fn levels_per_bit(&self) -> usize {
        1
    }
}

pub struct UnipolarNrz;

impl LineCode for UnipolarNrz {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        bits.iter()
            .map(|&bit| if bit { 1.0 } else { 0.0 })
            .collect()
    }
}

pub struct PolarNrzL;

impl LineCode for PolarNrzL {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        bits.iter()
            .map(|&bit| if bit { 1.0 } else { -1.0 })
            .collect()
    }
}

pub struct BipolarAmi;

impl LineCode for BipolarAmi {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        // Alternation state is local to this call
        let mut next_pulse = 1.0;
        let mut levels = Vec::with_capacity(bits.len());

        for &bit in bits {
            if bit {
                levels.push(next_pulse);
                next_pulse = -next_pulse;
            } else {
                levels.push(0.0);
            }
        }

        levels
    }
}

pub struct Manchester;

impl LineCode for Manchester {
    fn encode(&self, bits: &[Bit]) -> Vec<Level> {
        let mut levels = Vec::with_capacity(bits.len() * 2);

        for &bit in bits {
            if bit {
                // 1 -> high then low
                levels.extend_from_slice(&[1.0, -1.0]);
            } else {
                // 0 -> low then high
                levels.extend_from_slice(&[-1.0, 1.0]);
            }
        }

        levels
    }

    fn levels_per_bit(&self) -> usize {
        2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineCodingKind {
    UnipolarNrz,
    PolarNrzL,
    BipolarAmi,
    Manchester,
}

impl LineCodingKind {
    pub const ALL: [LineCodingKind; 4] = [
        LineCodingKind::UnipolarNrz,
        LineCodingKind::PolarNrzL,
        LineCodingKind::BipolarAmi,
        LineCodingKind::Manchester,
    ];

    /// Menu selector: 1 = Unipolar NRZ ... 4 = Manchester
    pub fn from_selector(selector: u8) -> Result<Self, LineCodeError> {
        match selector {
            1 => Ok(LineCodingKind::UnipolarNrz),
            2 => Ok(LineCodingKind::PolarNrzL),
            3 => Ok(LineCodingKind::BipolarAmi),
            4 => Ok(LineCodingKind::Manchester),
            other => Err(LineCodeError::InvalidScheme(other.to_string())),
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            LineCodingKind::UnipolarNrz => 1,
            LineCodingKind::PolarNrzL => 2,
            LineCodingKind::BipolarAmi => 3,
            LineCodingKind::Manchester => 4,
        }
    }

    /// Build a fresh coder for one run
    pub fn create(self) -> Box<dyn LineCode> {
        match self {
            LineCodingKind::UnipolarNrz => Box::new(UnipolarNrz),
            LineCodingKind::PolarNrzL => Box::new(PolarNrzL),
            LineCodingKind::BipolarAmi => Box::new(BipolarAmi),
            LineCodingKind::Manchester => Box::new(Manchester),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LineCodingKind::UnipolarNrz => "Unipolar NRZ",
            LineCodingKind::PolarNrzL => "Polar NRZ-L",
            LineCodingKind::BipolarAmi => "Bipolar AMI",
            LineCodingKind::Manchester => "Manchester",
        }
    }

    pub fn expansion_mode(self) -> ExpansionMode {
        match self {
            LineCodingKind::Manchester => ExpansionMode::Manchester,
            _ => ExpansionMode::Nrz,
        }
    }
}

impl fmt::Display for LineCodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineCodingKind {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(selector) = key.parse::<u8>() {
            return Self::from_selector(selector);
        }
        match key.as_str() {
            "unipolar" | "unipolar-nrz" | "nrz" => Ok(LineCodingKind::UnipolarNrz),
            "polar" | "polar-nrz-l" | "nrz-l" | "nrzl" => Ok(LineCodingKind::PolarNrzL),
            "ami" | "bipolar" | "bipolar-ami" => Ok(LineCodingKind::BipolarAmi),
            "manchester" => Ok(LineCodingKind::Manchester),
            _ => Err(LineCodeError::InvalidScheme(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::bits::parse_bits;

    fn encode(kind: LineCodingKind, data: &str) -> Vec<Level> {
        kind.create().encode(&parse_bits(data))
    }

    #[test]
    fn test_unipolar_nrz() {
        let levels = encode(LineCodingKind::UnipolarNrz, "10110");
        assert_eq!(levels, vec![1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_polar_nrz_l() {
        let levels = encode(LineCodingKind::PolarNrzL, "1001");
        assert_eq!(levels, vec![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_bipolar_ami_alternation() {
        let levels = encode(LineCodingKind::BipolarAmi, "11011");
        assert_eq!(levels, vec![1.0, -1.0, 0.0, 1.0, -1.0]);
    }

    #[test]
    fn test_bipolar_ami_marks_alternate() {
        let bits = parse_bits("1001011100101");
        let levels = BipolarAmi.encode(&bits);
        let marks: Vec<Level> = levels
            .iter()
            .copied()
            .filter(|&level| level != 0.0)
            .collect();
        for pair in marks.windows(2) {
            assert_eq!(pair[0], -pair[1]);
        }
        assert_eq!(marks.first(), Some(&1.0));
    }

    #[test]
    fn test_bipolar_ami_state_is_per_call() {
        let coder = LineCodingKind::BipolarAmi.create();
        assert_eq!(coder.encode(&[true]), vec![1.0]);
        assert_eq!(coder.encode(&[true]), vec![1.0]);
    }

    #[test]
    fn test_manchester() {
        let levels = encode(LineCodingKind::Manchester, "10");
        assert_eq!(levels, vec![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_level_count_per_scheme() {
        let bits = parse_bits("1100101");
        for kind in LineCodingKind::ALL {
            let coder = kind.create();
            let levels = coder.encode(&bits);
            assert_eq!(levels.len(), bits.len() * coder.levels_per_bit());
        }
    }

    #[test]
    fn test_empty_input() {
        for kind in LineCodingKind::ALL {
            assert!(kind.create().encode(&[]).is_empty());
        }
    }

    #[test]
    fn test_scheme_selection() {
        assert_eq!("1".parse::<LineCodingKind>().unwrap(), LineCodingKind::UnipolarNrz);
        assert_eq!(" 4 ".parse::<LineCodingKind>().unwrap(), LineCodingKind::Manchester);
        assert_eq!("AMI".parse::<LineCodingKind>().unwrap(), LineCodingKind::BipolarAmi);
        assert_eq!("nrz-l".parse::<LineCodingKind>().unwrap(), LineCodingKind::PolarNrzL);
        for kind in LineCodingKind::ALL {
            assert_eq!(LineCodingKind::from_selector(kind.selector()).unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_scheme() {
        assert!(matches!(
            "5".parse::<LineCodingKind>(),
            Err(LineCodeError::InvalidScheme(s)) if s == "5"
        ));
        assert!(matches!(
            LineCodingKind::from_selector(0),
            Err(LineCodeError::InvalidScheme(_))
        ));
        assert!("rz".parse::<LineCodingKind>().is_err());
    }
}
