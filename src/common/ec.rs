// Galois field arithmetic over GF(256) and Reed-Solomon codeword generation

const REDUCTION_POLYNOMIAL: usize = 0x11D;

// Exp table carries two periods so a product of two logs (at most 508)
// indexes without a modulo
const fn build_gf_tables() -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: usize = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= REDUCTION_POLYNOMIAL;
        }
        i += 1;
    }
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    (exp, log)
}

pub static EXP_TABLE: [u8; 512] = build_gf_tables().0;

pub static LOG_TABLE: [u8; 256] = build_gf_tables().1;

pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP_TABLE[LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize]
}

// Coefficients are MSB first
pub fn poly_mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(!a.is_empty() && !b.is_empty(), "Cannot multiply an empty polynomial");

    let mut res = vec![0; a.len() + b.len() - 1];
    for (i, &p) in a.iter().enumerate() {
        for (j, &q) in b.iter().enumerate() {
            res[i + j] ^= gf_mul(p, q);
        }
    }
    res
}

// Product of (x + a^i) for i in 0..degree
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut gen = vec![1];
    for i in 0..degree {
        gen = poly_mul(&gen, &[1, EXP_TABLE[i]]);
    }
    gen
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn ec_codewords(block: &[u8], gen_poly: &[u8]) -> Vec<u8> {
    debug_assert!(gen_poly[0] == 1, "Generator polynomial must be monic");
    debug_assert!(
        gen_poly[1..].iter().all(|&g| g != 0),
        "Generator polynomial must have invertible coefficients"
    );

    let len = block.len();
    let ecc_count = gen_poly.len() - 1;
    let gen_log: Vec<u8> = gen_poly[1..].iter().map(|&g| LOG_TABLE[g as usize]).collect();

    let mut res = block.to_vec();
    res.resize(len + ecc_count, 0);

    for i in 0..len {
        let lead_coeff = res[i] as usize;
        if lead_coeff == 0 {
            continue;
        }

        let log_lead_coeff = LOG_TABLE[lead_coeff] as usize;
        for (u, v) in res[i + 1..].iter_mut().zip(gen_log.iter()) {
            let log_sum = *v as usize + log_lead_coeff;
            debug_assert!(log_sum < 510, "Log sum has crossed 510: {log_sum}");
            *u ^= EXP_TABLE[log_sum];
        }
    }

    res.split_off(len)
}

#[cfg(test)]
mod galois_tests {

    use super::{gf_mul, EXP_TABLE, LOG_TABLE};

    #[test]
    fn test_exp_table_cycle() {
        assert_eq!(EXP_TABLE[0], 1);
        assert_eq!(EXP_TABLE[1], 2);
        assert_eq!(EXP_TABLE[8], 29);
        for i in 0..255 {
            assert_eq!(EXP_TABLE[i + 255], EXP_TABLE[i], "Exp table period broken at {i}");
        }
    }

    #[test]
    fn test_log_exp_inverse() {
        for i in 0..255usize {
            assert_eq!(LOG_TABLE[EXP_TABLE[i] as usize] as usize, i);
        }
        for x in 1..=255usize {
            assert_eq!(EXP_TABLE[LOG_TABLE[x] as usize] as usize, x);
        }
    }

    #[test]
    fn test_mul_zero_and_one() {
        for x in 0..=255u8 {
            assert_eq!(gf_mul(x, 0), 0);
            assert_eq!(gf_mul(0, x), 0);
            assert_eq!(gf_mul(x, 1), x);
            assert_eq!(gf_mul(1, x), x);
        }
    }

    #[test]
    fn test_mul_commutative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(gf_mul(a, b), gf_mul(b, a));
            }
        }
    }

    #[test]
    fn test_mul_associative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(5) {
                for c in (0..=255u8).step_by(3) {
                    assert_eq!(gf_mul(gf_mul(a, b), c), gf_mul(a, gf_mul(b, c)));
                }
            }
        }
    }

    #[test]
    fn test_mul_distributive() {
        for a in (0..=255u8).step_by(3) {
            for b in (0..=255u8).step_by(7) {
                for c in (0..=255u8).step_by(11) {
                    assert_eq!(gf_mul(a, b ^ c), gf_mul(a, b) ^ gf_mul(a, c));
                }
            }
        }
    }
}

#[cfg(test)]
mod rs_tests {

    use test_case::test_case;

    use super::{ec_codewords, generator_polynomial, poly_mul};

    #[test]
    fn test_poly_mul() {
        assert_eq!(poly_mul(&[1, 1], &[1, 2]), [1, 3, 2]);
        assert_eq!(poly_mul(&[1, 2], &[1, 4]), [1, 6, 8]);
        assert_eq!(poly_mul(&[2, 1], &[4, 5]), [8, 14, 5]);
    }

    #[test_case(2, &[1, 3, 2]; "degree 2")]
    #[test_case(3, &[1, 7, 14, 8]; "degree 3")]
    #[test_case(10, &[1, 216, 194, 159, 111, 199, 94, 95, 113, 157, 193]; "degree 10")]
    fn test_generator_polynomial(degree: usize, exp_gen: &[u8]) {
        assert_eq!(generator_polynomial(degree), exp_gen);
    }

    #[test]
    fn test_generator_polynomial_shape() {
        for degree in [16, 17, 22, 24, 26, 28, 30] {
            let gen = generator_polynomial(degree);
            assert_eq!(gen.len(), degree + 1);
            assert_eq!(gen[0], 1);
            assert!(gen.iter().all(|&g| g != 0), "Degree {degree}");
        }
    }

    #[test]
    fn test_poly_mod_1() {
        let gen = generator_polynomial(10);
        let res = ec_codewords(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", &gen);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let gen = generator_polynomial(13);
        let res = ec_codewords(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", &gen);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let gen = generator_polynomial(18);
        let res = ec_codewords(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", &gen);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_zero_block() {
        let gen = generator_polynomial(17);
        assert_eq!(ec_codewords(&[0; 9], &gen), [0; 17]);
    }

    #[test]
    fn test_linearity() {
        let gen = generator_polynomial(17);
        let a = *b"WOLFFLOW!";
        let b = *b"\x10\x20EC\x15\x01\x02\x04\x08";
        let xor: Vec<u8> = a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect();

        let ec_a = ec_codewords(&a, &gen);
        let ec_b = ec_codewords(&b, &gen);
        let ec_xor = ec_codewords(&xor, &gen);

        let combined: Vec<u8> = ec_a.iter().zip(ec_b.iter()).map(|(x, y)| x ^ y).collect();
        assert_eq!(ec_xor, combined);
    }
}
