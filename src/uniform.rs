use nalgebra_glm as glm;

/// GPU-side camera block: the combined view-projection matrix plus the eye
/// position lighting shaders read as `viewPos`. Column-major, 16-byte rows,
/// byte-castable for a uniform buffer write.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
    view_pos: [f32; 3],
    _padding: f32,
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: glm::Mat4::identity().into(),
            view_pos: [0.0; 3],
            _padding: 0.0,
        }
    }

    pub fn update(&mut self, view_proj: &glm::Mat4, eye: &glm::Vec3) {
        self.view_proj = (*view_proj).into();
        self.view_pos = [eye.x, eye.y, eye.z];
    }

    pub fn view_proj(&self) -> &[[f32; 4]; 4] {
        &self.view_proj
    }

    pub fn view_pos(&self) -> [f32; 3] {
        self.view_pos
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(CameraUniform::new().as_bytes().len(), 80);
    }

    #[test]
    fn update_stores_columns_and_eye() {
        let translation = glm::translate(&glm::Mat4::identity(), &glm::vec3(1.0, 2.0, 3.0));
        let mut uniform = CameraUniform::new();
        uniform.update(&translation, &glm::vec3(7.0, 8.0, 9.0));

        // Column-major: the translation lives in the last column.
        assert_eq!(uniform.view_proj()[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.view_pos(), [7.0, 8.0, 9.0]);
    }
}
