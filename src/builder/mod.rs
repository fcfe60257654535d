mod qr;

pub use qr::{Module, QrCode};

use std::ops::Deref;

use crate::common::{
    codec::{encode, encode_with_version},
    ec::{ec_codewords, generator_polynomial},
    error::QrResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::Version,
    BitStream,
};

pub struct QrBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    mask: Option<MaskPattern>,
}

impl<'a> QrBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }
}

impl QrBuilder<'_> {
    pub fn build(&self) -> QrResult<QrCode> {
        // Encode data into the smallest fitting version, unless pinned
        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(self.data, v)?, v),
            None => encode(self.data)?,
        };

        // Compute error correction codewords, interleave both sequences
        // and store in payload
        let total_codewords = version.total_codewords();
        let mut payload = BitStream::new(total_codewords << 3);
        let (data_blocks, ecc_blocks) = Self::compute_ecc(encoded_data.data(), version);
        payload.extend(&Self::interleave(&data_blocks));
        payload.extend(&Self::interleave(&ecc_blocks));

        // Construct QR
        let mut qr = QrCode::new(version);
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(payload);

        match self.mask {
            Some(m) => qr.apply_mask(m),
            None => {
                apply_best_mask(&mut qr);
            }
        };

        Ok(qr)
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc(data: &[u8], version: Version) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
        let data_blocks = Self::blockify(data, version);

        let gen_poly = generator_polynomial(version.ecc_per_block());
        let ecc_blocks =
            data_blocks.iter().map(|b| ec_codewords(b, &gen_poly)).collect::<Vec<_>>();

        (data_blocks, ecc_blocks)
    }

    pub(crate) fn blockify(data: &[u8], version: Version) -> Vec<&[u8]> {
        let (block1_size, block1_count, block2_size, block2_count) =
            version.data_codewords_per_block();

        let total_blocks = block1_count + block2_count;
        let total_block1_size = block1_size * block1_count;
        let total_size = total_block1_size + block2_size * block2_count;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(total_blocks);
        data_blocks.extend(data[..total_block1_size].chunks(block1_size));
        if block2_size > 0 {
            data_blocks.extend(data[total_block1_size..].chunks(block2_size));
        }
        data_blocks
    }

    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().expect("Blocks is empty");
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
