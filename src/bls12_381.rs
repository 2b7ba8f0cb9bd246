use num_bigint::BigUint;
use crate::algebra::Structure;
use crate::curve::{CurvePoint, CyclicGroup, EllipticCurve};
use crate::errors::AlgebraResult;
use crate::extension_field::{ExtensionField, ExtensionFieldElement};
use crate::field::{PrimeField, PrimeFieldElement};
use crate::polynomial::PolynomialRing;

/// Base field modulus `p`.
pub const FIELD_MODULUS: &str = "4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787";

/// Prime order `r` of G1 and G2, also the scalar field modulus.
pub const CURVE_ORDER: &str = "52435875175126190479447740508185965837690552500527637822603658699938581184513";

/// `u^2 + 1`
pub const FQ2_MODULUS_COEFFS: [i64; 3] = [1, 0, 1];

/// `w^12 - 2w^6 + 2`
pub const FQ12_MODULUS_COEFFS: [i64; 13] = [2, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, 0, 1];

pub const CURVE_B: i64 = 4;

pub const G1_X: &str = "3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507";
pub const G1_Y: &str = "1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569";

pub const G2_X: [&str; 2] = [
    "352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160",
    "3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758",
];
pub const G2_Y: [&str; 2] = [
    "1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905",
    "927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582",
];

pub type Fq2 = ExtensionFieldElement<PrimeFieldElement>;
pub type Fq12 = ExtensionFieldElement<PrimeFieldElement>;
pub type G1Point = CurvePoint<PrimeFieldElement>;
pub type G2Point = CurvePoint<Fq2>;

/// The BLS12-381 tower: `Fq`, `Fq2`, `Fq12`, the scalar field `Fr` and the
/// two source groups.
#[derive(Clone, Debug)]
pub struct Bls12_381 {
    fq: PrimeField,
    fr: PrimeField,
    fq2: ExtensionField<PrimeFieldElement>,
    fq12: ExtensionField<PrimeFieldElement>,
    g1: CyclicGroup<PrimeFieldElement>,
    g2: CyclicGroup<Fq2>,
}

fn parse(s: &str) -> AlgebraResult<BigUint> {
    Ok(s.parse::<BigUint>()?)
}

impl Bls12_381 {
    pub fn new() -> AlgebraResult<Self> {
        let order = parse(CURVE_ORDER)?;
        let fq = PrimeField::new(parse(FIELD_MODULUS)?);
        let fr = PrimeField::new(order.clone());
        let ring = PolynomialRing::new(fq.clone());

        let to_fq = |coeffs: &[i64]| coeffs.iter().map(|&c| fq.from(c)).collect::<Vec<_>>();

        let fq2 = ExtensionField::new(ring.from(to_fq(&FQ2_MODULUS_COEFFS)))?;
        let fq12 = ExtensionField::new(ring.from(to_fq(&FQ12_MODULUS_COEFFS)))?;

        let g1_curve = EllipticCurve::new(fq.zero(), fq.from(CURVE_B));
        let g1 = CyclicGroup::new(
            g1_curve,
            fq.from_biguint(&parse(G1_X)?),
            fq.from_biguint(&parse(G1_Y)?),
            order.clone(),
        )?;

        let fq2_from = |c: [&str; 2]| -> AlgebraResult<Fq2> {
            Ok(fq2.from_coeffs(vec![fq.from_biguint(&parse(c[0])?), fq.from_biguint(&parse(c[1])?)]))
        };

        // b = 4 + 4u
        let g2_curve = EllipticCurve::new(fq2.zero(), fq2.from_coeffs(to_fq(&[CURVE_B, CURVE_B])));
        let g2 = CyclicGroup::new(g2_curve, fq2_from(G2_X)?, fq2_from(G2_Y)?, order)?;

        Ok(Self {
            fq,
            fr,
            fq2,
            fq12,
            g1,
            g2,
        })
    }

    pub fn fq(&self) -> &PrimeField {
        &self.fq
    }

    /// Scalar field, integers modulo the group order.
    pub fn fr(&self) -> &PrimeField {
        &self.fr
    }

    pub fn fq2(&self) -> &ExtensionField<PrimeFieldElement> {
        &self.fq2
    }

    pub fn fq12(&self) -> &ExtensionField<PrimeFieldElement> {
        &self.fq12
    }

    pub fn g1(&self) -> &CyclicGroup<PrimeFieldElement> {
        &self.g1
    }

    pub fn g2(&self) -> &CyclicGroup<Fq2> {
        &self.g2
    }
}
